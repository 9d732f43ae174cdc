//! Card resolver: search-space assembly, IRI resolution, canonical hash
//! verification.
//!
//! Module-level search-path caching is deliberately avoided: the search
//! space is assembled fresh on every [`resolve_cards`] call, not cached at
//! load time or across calls, so environment changes between calls take
//! effect immediately.

use std::collections::{BTreeMap, HashSet};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use worldsim_kernel::hash::canonical_sha256;
use worldsim_kernel::model::LawCard;

use crate::error::ResolverError;

/// Environment variable naming directories and/or index files to search.
pub const CARD_PATHS_ENV: &str = "RULEGRAPH_CARD_PATHS";

/// The assembled search space for one resolution pass: an ordered list of
/// directories to scan recursively, and an id → path index aggregated from
/// any index files named in `RULEGRAPH_CARD_PATHS`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSpace {
    pub directories: Vec<PathBuf>,
    pub index: BTreeMap<String, PathBuf>,
}

/// Assemble the search space from the current process environment. The
/// CLI's `RULEGRAPH_DEBUG` diagnostic prints `directories` from this same
/// query rather than re-deriving it.
#[must_use]
pub fn assemble_search_space() -> SearchSpace {
    assemble_search_space_from_env(std::env::var_os(CARD_PATHS_ENV).as_deref())
}

/// `assemble_search_space`, parameterized on the raw env var value for
/// testability without mutating the process environment.
#[must_use]
pub fn assemble_search_space_from_env(raw: Option<&OsStr>) -> SearchSpace {
    let mut directories = Vec::new();
    let mut index = BTreeMap::new();

    if let Some(raw) = raw {
        for entry in std::env::split_paths(raw) {
            if entry.as_os_str().is_empty() {
                continue;
            }
            if entry.is_dir() {
                directories.push(entry);
            } else if entry.extension() == Some(OsStr::new("json")) {
                load_index_file(&entry, &mut index);
            }
        }
    }

    if directories.is_empty() && index.is_empty() {
        directories.extend(discover_default_dirs());
    }

    dedupe_directories(&mut directories);

    SearchSpace { directories, index }
}

fn load_index_file(path: &Path, index: &mut BTreeMap<String, PathBuf>) {
    let Ok(text) = std::fs::read_to_string(path) else {
        return;
    };
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(&text) else {
        return;
    };
    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    for (id, path_value) in map {
        let Some(path_str) = path_value.as_str() else {
            continue;
        };
        let entry_path = PathBuf::from(path_str);
        let resolved = if entry_path.is_absolute() { entry_path } else { base.join(entry_path) };
        index.entry(id).or_insert(resolved);
    }
}

/// Development-time fallback search dirs, used only when
/// `RULEGRAPH_CARD_PATHS` yields neither directories nor index entries. A
/// `CARGO_MANIFEST_DIR`-relative walk for a sibling `lawcards/cards`
/// directory and a legacy `examples/data/lawcards` under the repo root.
fn discover_default_dirs() -> Vec<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir.parent().map(Path::to_path_buf).unwrap_or_else(|| manifest_dir.clone());

    let mut dirs = Vec::new();
    if let Some(repo_parent) = repo_root.parent() {
        let sibling = repo_parent.join("lawcards").join("cards");
        if sibling.is_dir() {
            dirs.push(sibling);
        }
    }
    let legacy = repo_root.join("examples").join("data").join("lawcards");
    if legacy.is_dir() {
        dirs.push(legacy);
    }
    dirs
}

fn dedupe_directories(dirs: &mut Vec<PathBuf>) {
    let mut seen = HashSet::new();
    dirs.retain(|d| {
        let key = std::fs::canonicalize(d).unwrap_or_else(|_| d.clone());
        seen.insert(key)
    });
}

fn file_label(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}

/// Load a card from `path`, verifying its `sha256` (if present) against the
/// canonical hash of the raw JSON. A present, failing `sha256` is always a
/// hard error here — callers that want to swallow mismatches during an IRI
/// scan must catch [`ResolverError::HashMismatch`] themselves, so that
/// fixtures with deliberately corrupted cards can coexist with valid ones.
fn load_and_verify(path: &Path) -> Result<LawCard, ResolverError> {
    let text = std::fs::read_to_string(path).map_err(|e| ResolverError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| ResolverError::Schema {
        reference: path.display().to_string(),
        detail: e.to_string(),
    })?;
    let card = LawCard::from_json_value(&value).map_err(|e| ResolverError::Schema {
        reference: path.display().to_string(),
        detail: e.to_string(),
    })?;
    if let Some(declared) = &card.sha256 {
        let computed = canonical_sha256(&value);
        if declared != &computed {
            return Err(ResolverError::HashMismatch {
                path: file_label(path),
                declared: declared.clone(),
                computed,
            });
        }
    }
    Ok(card)
}

/// Recursively enumerate `*.json` files under `dir`, sorted at every level
/// so scan order is deterministic regardless of filesystem iteration order.
fn recursive_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(Result::ok)
        .map(|e| e.path())
        .collect();
    entries.sort();

    let mut files = Vec::new();
    for entry in entries {
        if entry.is_dir() {
            files.extend(recursive_json_files(&entry));
        } else if entry.extension() == Some(OsStr::new("json")) {
            files.push(entry);
        }
    }
    files
}

/// Resolve `id` as an IRI across `space`: check the index map first, then
/// walk each search directory recursively for a matching `*.json` file.
fn resolve_iri(id: &str, space: &SearchSpace) -> Result<LawCard, ResolverError> {
    if let Some(path) = space.index.get(id) {
        if let Ok(card) = load_and_verify(path) {
            return Ok(card);
        }
        // Index entry missing or failed verification: fall through to scan.
    }

    let mut deferred_error = None;
    for dir in &space.directories {
        if !dir.is_dir() {
            continue;
        }
        for candidate in recursive_json_files(dir) {
            let Ok(text) = std::fs::read_to_string(&candidate) else {
                continue;
            };
            let value: serde_json::Value = match serde_json::from_str(&text) {
                Ok(v) => v,
                Err(e) => {
                    deferred_error.get_or_insert(ResolverError::Schema {
                        reference: candidate.display().to_string(),
                        detail: e.to_string(),
                    });
                    continue;
                }
            };
            if value.get("id").and_then(serde_json::Value::as_str) != Some(id) {
                continue;
            }
            match load_and_verify(&candidate) {
                Ok(card) => return Ok(card),
                Err(ResolverError::HashMismatch { .. }) => continue,
                Err(other) => {
                    deferred_error.get_or_insert(other);
                }
            }
        }
    }

    match deferred_error {
        Some(err) => Err(err),
        None => Err(ResolverError::NotFound { reference: id.to_string() }),
    }
}

/// Resolve a list of law-card references into a map keyed by each card's
/// declared `id`. Assembles a fresh search space from the current
/// environment for the scan.
///
/// # Errors
///
/// See [`ResolverError`].
pub fn resolve_cards(refs: &[String]) -> Result<BTreeMap<String, LawCard>, ResolverError> {
    resolve_cards_with_space(refs, &assemble_search_space())
}

/// `resolve_cards`, taking an explicit [`SearchSpace`] instead of deriving
/// one from the environment — used by tests and by callers that already
/// computed the space (e.g. to print it under `RULEGRAPH_DEBUG`).
///
/// # Errors
///
/// See [`ResolverError`].
pub fn resolve_cards_with_space(refs: &[String], space: &SearchSpace) -> Result<BTreeMap<String, LawCard>, ResolverError> {
    let mut out = BTreeMap::new();
    for reference in refs {
        let path = Path::new(reference);
        let card = if path.exists() { load_and_verify(path)? } else { resolve_iri(reference, space)? };
        out.insert(card.id.clone(), card);
    }
    Ok(out)
}
