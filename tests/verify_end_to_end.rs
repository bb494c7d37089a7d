use std::sync::Arc;

use deployflow::adapters::{ScriptedVerificationService, Verifier, ALREADY_VERIFIED, BASIC_NFT};
use deployflow::core::{Address, ArgValue, DeployLog, DevelopmentChains, MemoryLog, NetworkContext};
use deployflow::local_engine;
use deployflow::policies::MockConfig;

#[tokio::test]
async fn already_verified_is_the_only_output_after_deploy() {
    let engine_out = MemoryLog::new();
    let mut engine = local_engine(&MockConfig::default(), None, engine_out).unwrap();
    engine.run(&NetworkContext::local(), &["basicnft"]).await.unwrap();
    let nft = engine.deployment("hardhat", BASIC_NFT).unwrap().unwrap();

    let out = MemoryLog::new();
    let service = Arc::new(ScriptedVerificationService::failing_with("Already Verified"));
    let verifier = Verifier::new(service.clone(), Arc::new(out.clone()));

    verifier.verify(nft.address, &nft.args).await;

    assert_eq!(out.lines(), vec![ALREADY_VERIFIED.to_string()]);
    assert_eq!(service.requests()[0].address, nft.address);
}

#[tokio::test]
async fn verify_never_fails_for_degenerate_input() {
    let out = MemoryLog::new();
    let service = Arc::new(ScriptedVerificationService::failing_with("Invalid address: 0x0000000000000000000000000000000000000000"));
    let verifier = Verifier::new(service, Arc::new(out.clone()));

    verifier.verify(Address::ZERO, &[ArgValue::Str(String::new()), ArgValue::DeploymentRef("Nope".into())]).await;

    assert_eq!(out.lines(), vec!["Invalid address: 0x0000000000000000000000000000000000000000".to_string()]);
}

#[tokio::test]
async fn public_network_run_verifies_through_project_script() {
    let out = MemoryLog::new();
    let service = Arc::new(ScriptedVerificationService::succeeding());
    let sink: Arc<dyn DeployLog> = Arc::new(out.clone());
    let mut engine = local_engine(&MockConfig::default(), Some(Verifier::new(service.clone(), sink)), out.clone()).unwrap();
    let sepolia = NetworkContext::resolve("sepolia", 11_155_111, &DevelopmentChains::default());

    engine.run(&sepolia, &["all"]).await.unwrap();

    assert_eq!(engine.deployments("sepolia").unwrap().len(), 1);
    assert_eq!(service.requests().len(), 1);
    assert!(!out.lines().iter().any(|l| l.contains("Mocks")));
}
