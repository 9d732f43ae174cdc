//! An IRI scan across a directory containing both a corrupted-hash card and
//! a valid card sharing the same `id` resolves to the valid one without
//! surfacing the sibling's hash failure.

mod support;

use serde_json::json;

use worldsim_cards::{resolve_cards_with_space, SearchSpace};
use worldsim_kernel::hash::canonical_sha256;

fn card_value(id: &str) -> serde_json::Value {
    let mut v = json!({
        "id": id,
        "version": "1.0.0",
        "type": "rg:LawCard",
        "parameters": {"G": {"value": support::G, "unit": "m3 kg-1 s-2"}},
    });
    let hash = canonical_sha256(&v);
    v["sha256"] = json!(hash);
    v
}

#[test]
fn scan_skips_bad_hash_sibling_and_returns_valid_card() {
    let dir = tempfile::tempdir().unwrap();
    let id = "rg:law/physics.gravity.newton.v1";

    let good = card_value(id);
    let mut bad = good.clone();
    bad["sha256"] = json!("0".repeat(64));

    std::fs::write(dir.path().join("a_corrupted.json"), serde_json::to_vec(&bad).unwrap()).unwrap();
    std::fs::write(dir.path().join("b_valid.json"), serde_json::to_vec(&good).unwrap()).unwrap();

    let space = SearchSpace {
        directories: vec![dir.path().to_path_buf()],
        index: Default::default(),
    };
    let refs = vec![id.to_string()];
    let resolved = resolve_cards_with_space(&refs, &space).unwrap();

    let card = resolved.get(id).expect("valid sibling should resolve despite the corrupted one sorting first");
    assert_eq!(card.sha256.as_deref(), good["sha256"].as_str());
}
