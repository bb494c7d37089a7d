//! Fixture `["mock", "basicnft"]` sobre la red local.

use deployflow::adapters::{BasicNftScript, MocksScript, BASIC_NFT};
use deployflow::core::model::LOCAL_DEPLOYER;
use deployflow::core::{DeployEventKind, MemoryLog, NetworkContext};
use deployflow::local_engine;
use deployflow::policies::MockConfig;

#[tokio::test]
async fn fixture_selects_only_basic_nft_and_leaves_code_on_chain() {
    let mut engine = local_engine(&MockConfig::default(), None, MemoryLog::new()).unwrap();

    let run_id = engine.fixture(&NetworkContext::local(), &["mock", "basicnft"]).await.unwrap();

    let started: Vec<String> = engine.events_for(run_id)
                                     .into_iter()
                                     .filter_map(|e| match e.kind {
                                         DeployEventKind::StepStarted { step_id, .. } => Some(step_id),
                                         _ => None,
                                     })
                                     .collect();
    assert_eq!(started, vec![BasicNftScript::ID]);
    assert!(!started.iter().any(|id| id == MocksScript::ID));

    let records = engine.deployments("hardhat").unwrap();
    assert_eq!(records.len(), 1);
    let nft = &records[0];
    assert_eq!(nft.name, BASIC_NFT);
    assert_eq!(nft.contract, BASIC_NFT);
    assert_eq!(nft.deployer, LOCAL_DEPLOYER);
    assert!(nft.args.is_empty());
    assert_eq!(engine.backend().code_at(nft.address).as_deref(), Some(BASIC_NFT));
    assert_eq!(engine.backend().history().len(), 1);
}

#[tokio::test]
async fn fixture_refuses_public_network() {
    let mut engine = local_engine(&MockConfig::default(), None, MemoryLog::new()).unwrap();
    let sepolia = NetworkContext::resolve("sepolia", 11_155_111, &Default::default());

    assert!(engine.fixture(&sepolia, &["basicnft"]).await.is_err());
    assert!(engine.backend().history().is_empty());
}
