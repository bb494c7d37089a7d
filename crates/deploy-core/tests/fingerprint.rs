use deploy_core::engine::ctx::deployment_fingerprint;
use deploy_core::hashing::hash_value;
use deploy_core::{Address, ArgValue, ContractArtifact};
use serde_json::json;

#[test]
fn hash_value_ignores_key_order() {
    let h = hash_value(&json!({"b": 2, "a": 1}));
    assert_eq!(h.len(), 64);
    assert_eq!(h, hash_value(&json!({"a": 1, "b": 2})));
}

#[test]
fn deployment_fingerprint_tracks_bytecode_deployer_and_args() {
    let artifact = ContractArtifact::new("MockV3Aggregator", "bytecode-a");
    let from = Address::repeat_byte(1);
    let args = vec![ArgValue::uint(18u64), ArgValue::uint(2000u64)];
    let base = deployment_fingerprint(&artifact, from, &args).unwrap();

    assert_eq!(base, deployment_fingerprint(&artifact, from, &args).unwrap());
    assert_ne!(base,
               deployment_fingerprint(&ContractArtifact::new("MockV3Aggregator", "bytecode-b"), from, &args).unwrap());
    assert_ne!(base, deployment_fingerprint(&artifact, Address::repeat_byte(2), &args).unwrap());
    let swapped = vec![ArgValue::uint(2000u64), ArgValue::uint(18u64)];
    assert_ne!(base, deployment_fingerprint(&artifact, from, &swapped).unwrap());
}
