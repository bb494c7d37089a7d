use deployflow::core::{ArgValue, MemoryLog, NetworkContext, U256};
use deployflow::local_engine;
use deployflow::policies::{MockConfig, MOCK_V3_AGGREGATOR, VRF_COORDINATOR_V2_5_MOCK};

fn ether(n: u64) -> U256 {
    U256::from(n) * U256::from(1_000_000_000_000_000_000u64)
}

#[tokio::test]
async fn hardhat_mocks_land_in_registry_with_exact_args() {
    let mut engine = local_engine(&MockConfig::default(), None, MemoryLog::new()).unwrap();

    engine.run(&NetworkContext::local(), &["mocks"]).await.unwrap();

    let records = engine.deployments("hardhat").unwrap();
    assert_eq!(records.len(), 2);

    let coordinator = engine.deployment("hardhat", VRF_COORDINATOR_V2_5_MOCK).unwrap().unwrap();
    assert_eq!(coordinator.args,
               vec![ArgValue::Uint(ether(1) / U256::from(4u64)),
                    ArgValue::Uint(U256::from(1_000_000_000u64)),
                    ArgValue::Uint(ether(1))]);

    let aggregator = engine.deployment("hardhat", MOCK_V3_AGGREGATOR).unwrap().unwrap();
    assert_eq!(aggregator.args, vec![ArgValue::uint(18u64), ArgValue::Uint(ether(2000))]);
}

#[tokio::test]
async fn rerunning_mocks_does_not_duplicate_records() {
    let mut engine = local_engine(&MockConfig::default(), None, MemoryLog::new()).unwrap();
    let net = NetworkContext::local();

    let first = engine.run(&net, &["mocks"]).await.unwrap();
    let before = engine.deployments("hardhat").unwrap();
    let second = engine.run(&net, &["mocks"]).await.unwrap();

    assert_eq!(engine.deployments("hardhat").unwrap(), before);
    assert_eq!(engine.backend().history().len(), 2);
    assert_eq!(engine.run_fingerprint(first), engine.run_fingerprint(second));
}

#[test]
fn mocks_run_under_blocking_harness() {
    let mut engine = local_engine(&MockConfig::default(), None, MemoryLog::new()).unwrap();
    let run_id = tokio_test::block_on(engine.fixture(&NetworkContext::local(), &["all"])).unwrap();
    assert_eq!(engine.event_codes(run_id), "ISDDFSDFC");
}
