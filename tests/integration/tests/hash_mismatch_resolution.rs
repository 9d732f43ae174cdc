//! Direct-path resolution of a card whose declared `sha256` does not match
//! its canonical hash is a hard error.

mod support;

use serde_json::json;

use worldsim_cards::{resolve_cards_with_space, ResolverError, SearchSpace};

#[test]
fn direct_path_hash_mismatch_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = json!({
        "id": "rg:law/physics.gravity.newton.v1",
        "version": "1.0.0",
        "type": "rg:LawCard",
        "parameters": {"G": {"value": support::G, "unit": "m3 kg-1 s-2"}},
    });
    value["sha256"] = json!("f".repeat(64));

    let path = dir.path().join("gravity.json");
    std::fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();

    let refs = vec![path.to_string_lossy().into_owned()];
    let err = resolve_cards_with_space(&refs, &SearchSpace::default()).unwrap_err();

    assert!(matches!(err, ResolverError::HashMismatch { .. }));
    assert!(err.to_string().contains("sha256 mismatch"));
}
