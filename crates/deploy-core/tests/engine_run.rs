use std::collections::HashSet;
use std::sync::Mutex;

use deploy_core::model::LOCAL_DEPLOYER;
use deploy_core::{async_trait, Address, ArgValue, ArtifactCatalog, ChainBackend, ContractArtifact, DeployCtx,
                  DeployEngine, DeployError, DeployEventKind, DeployOptions, DeployReceipt, DeployRequest, DeployStep,
                  DeploymentRegistry, DevelopmentChains, InMemoryDeploymentRegistry, MemoryLog, NetworkContext, B256};

/// Backend de prueba: asigna direcciones secuenciales y recuerda cada request.
#[derive(Default)]
struct RecordingBackend {
    requests: Mutex<Vec<DeployRequest>>,
    wiped: Mutex<HashSet<Address>>,
    fail_contract: Option<(String, DeployError)>,
}

impl RecordingBackend {
    fn failing_on(contract: &str, error: DeployError) -> Self {
        Self { fail_contract: Some((contract.to_string(), error)),
               ..Default::default() }
    }

    fn requests(&self) -> Vec<DeployRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn wipe(&self, address: Address) {
        self.wiped.lock().unwrap().insert(address);
    }
}

#[async_trait]
impl ChainBackend for RecordingBackend {
    async fn deploy_contract(&self, request: &DeployRequest) -> Result<DeployReceipt, DeployError> {
        if let Some((contract, err)) = &self.fail_contract {
            if *contract == request.artifact.contract {
                return Err(err.clone());
            }
        }
        let mut reqs = self.requests.lock().unwrap();
        reqs.push(request.clone());
        let n = reqs.len() as u8;
        Ok(DeployReceipt { address: Address::repeat_byte(n),
                           tx_hash: B256::repeat_byte(n),
                           block_number: n as u64 })
    }

    async fn has_code(&self, address: Address) -> Result<bool, DeployError> {
        Ok(!self.wiped.lock().unwrap().contains(&address))
    }
}

/// Step que despliega una lista fija de `(name, args)`.
struct FixedStep {
    id: &'static str,
    tags: Vec<&'static str>,
    deployments: Vec<(&'static str, Vec<ArgValue>)>,
    live_only: bool,
}

impl FixedStep {
    fn new(id: &'static str, tags: Vec<&'static str>, deployments: Vec<(&'static str, Vec<ArgValue>)>) -> Self {
        Self { id, tags, deployments, live_only: false }
    }
}

#[async_trait]
impl DeployStep for FixedStep {
    fn id(&self) -> &str { self.id }
    fn tags(&self) -> Vec<&str> { self.tags.clone() }
    fn skip(&self, network: &NetworkContext) -> bool { self.live_only && network.is_development() }
    async fn run(&self, ctx: &mut DeployCtx<'_>) -> Result<(), DeployError> {
        let deployer = ctx.named_account("deployer")?;
        for (name, args) in &self.deployments {
            ctx.deploy(name, DeployOptions::new(deployer).args(args.clone()).log(true)).await?;
        }
        Ok(())
    }
}

fn catalog() -> ArtifactCatalog {
    ArtifactCatalog::new().with(ContractArtifact::new("Feed", "feed-v1"))
                          .with(ContractArtifact::new("Consumer", "consumer-v1"))
                          .with(ContractArtifact::new("Nft", "nft-v1"))
}

fn feed_then_consumer() -> (FixedStep, FixedStep) {
    (FixedStep::new("00-feed", vec!["all", "mocks"], vec![("Feed", vec![ArgValue::uint(8u64)])]),
     FixedStep::new("01-consumer",
                    vec!["all", "consumer"],
                    vec![("Consumer", vec![ArgValue::DeploymentRef("Feed".into())])]))
}

#[tokio::test]
async fn steps_run_in_declaration_order_and_resolve_references() {
    let (feed, consumer) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .add_step(consumer)
        .build();
    let net = NetworkContext::local();

    let run_id = engine.run(&net, &["all"]).await.expect("run should complete");

    let reqs = engine.backend().requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].artifact.contract, "Feed");
    assert_eq!(reqs[0].from, LOCAL_DEPLOYER);
    assert_eq!(reqs[1].args, vec![ArgValue::Address(Address::repeat_byte(1))]);
    assert_eq!(engine.event_codes(run_id), "ISDFSDFC");
    assert!(engine.run_fingerprint(run_id).is_some());
    let names: Vec<_> = engine.deployments("hardhat").unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Feed", "Consumer"]);
}

#[tokio::test]
async fn unchanged_deployments_are_reused() {
    let (feed, consumer) = feed_then_consumer();
    let log = MemoryLog::new();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(log.clone())
        .add_step(feed)
        .add_step(consumer)
        .build();
    let net = NetworkContext::local();

    let first = engine.run(&net, &["all"]).await.unwrap();
    let second = engine.run(&net, &["all"]).await.unwrap();

    assert_eq!(engine.backend().requests().len(), 2, "second run must not redeploy");
    assert_eq!(engine.event_codes(second), "ISRFSRFC");
    assert_eq!(engine.run_fingerprint(first), engine.run_fingerprint(second));
    assert_eq!(engine.registry().len(), 2);
    assert!(log.lines().iter().any(|l| l.starts_with("reusing \"Feed\" at ")));
}

#[tokio::test]
async fn changed_bytecode_triggers_redeploy() {
    let (feed, _) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .build();
    let net = NetworkContext::local();

    engine.run(&net, &["mocks"]).await.unwrap();
    let before = engine.deployment("hardhat", "Feed").unwrap().unwrap();
    engine.catalog_mut().insert(ContractArtifact::new("Feed", "feed-v2"));
    engine.run(&net, &["mocks"]).await.unwrap();
    let after = engine.deployment("hardhat", "Feed").unwrap().unwrap();

    assert_eq!(engine.backend().requests().len(), 2);
    assert_ne!(before.fingerprint, after.fingerprint);
    assert_ne!(before.address, after.address);
}

#[tokio::test]
async fn missing_code_triggers_redeploy() {
    let (feed, _) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .build();
    let net = NetworkContext::local();

    engine.run(&net, &["mocks"]).await.unwrap();
    let first = engine.deployment("hardhat", "Feed").unwrap().unwrap();
    engine.backend().wipe(first.address);
    let run_id = engine.run(&net, &["mocks"]).await.unwrap();

    assert_eq!(engine.backend().requests().len(), 2);
    assert_eq!(engine.event_codes(run_id), "ISDFC");
}

#[tokio::test]
async fn failure_stops_the_run_and_keeps_earlier_records() {
    let boom = DeployError::Backend("out of gas".into());
    let (feed, consumer) = feed_then_consumer();
    let nft = FixedStep::new("02-nft", vec!["all"], vec![("Nft", vec![])]);
    let mut engine = DeployEngine::builder(RecordingBackend::failing_on("Consumer", boom.clone()),
                                           InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .add_step(consumer)
        .add_step(nft)
        .build();
    let net = NetworkContext::local();

    let err = engine.run(&net, &["all"]).await.unwrap_err();

    assert_eq!(err, boom, "backend error must propagate unmodified");
    assert!(engine.deployment("hardhat", "Feed").unwrap().is_some());
    assert!(engine.deployment("hardhat", "Consumer").unwrap().is_none());
    assert!(engine.deployment("hardhat", "Nft").unwrap().is_none());
    let reqs = engine.backend().requests();
    assert_eq!(reqs.len(), 1);
}

#[tokio::test]
async fn failed_run_is_journaled() {
    let boom = DeployError::Backend("nonce too low".into());
    let (feed, _) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::failing_on("Feed", boom.clone()),
                                           InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .build();
    let net = NetworkContext::local();

    assert!(engine.run(&net, &["all"]).await.is_err());
    // el run_id no se devuelve en error: se busca en el store
    let events: Vec<_> = engine.event_store().inner.values().flatten().cloned().collect();
    assert!(events.iter().any(|e| matches!(&e.kind,
        DeployEventKind::StepFailed { step_id, error, .. } if step_id == "00-feed" && error.contains("nonce too low"))));
    assert!(!events.iter().any(|e| matches!(e.kind, DeployEventKind::RunCompleted { .. })));
}

#[tokio::test]
async fn unresolved_reference_aborts_before_backend_call() {
    let (_, consumer) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(consumer)
        .build();

    let err = engine.run(&NetworkContext::local(), &["consumer"]).await.unwrap_err();

    assert_eq!(err, DeployError::UnresolvedArgument { reference: "Feed".into() });
    assert!(engine.backend().requests().is_empty());
}

#[tokio::test]
async fn unknown_artifact_is_an_error() {
    let step = FixedStep::new("00-x", vec!["all"], vec![("Unknown", vec![])]);
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(step)
        .build();

    let err = engine.run(&NetworkContext::local(), &[]).await.unwrap_err();
    assert_eq!(err, DeployError::UnknownArtifact("Unknown".into()));
}

#[tokio::test]
async fn fixture_refuses_live_networks() {
    let (feed, _) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .build();
    let sepolia = NetworkContext::resolve("sepolia", 11155111, &DevelopmentChains::default());

    let err = engine.fixture(&sepolia, &["mocks"]).await.unwrap_err();
    assert_eq!(err, DeployError::FixtureOnLiveNetwork("sepolia".into()));
    assert!(engine.backend().requests().is_empty());

    engine.fixture(&NetworkContext::local(), &["mocks"]).await.unwrap();
    assert_eq!(engine.backend().requests().len(), 1);
}

#[tokio::test]
async fn skipped_steps_are_journaled_and_not_run() {
    let mut live = FixedStep::new("05-live", vec!["all"], vec![("Nft", vec![])]);
    live.live_only = true;
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(live)
        .build();

    let run_id = engine.run(&NetworkContext::local(), &["all"]).await.unwrap();
    assert_eq!(engine.event_codes(run_id), "IKC");
    assert!(engine.backend().requests().is_empty());
}

#[tokio::test]
async fn records_are_isolated_per_network() {
    let (feed, _) = feed_then_consumer();
    let mut engine = DeployEngine::builder(RecordingBackend::default(), InMemoryDeploymentRegistry::new())
        .with_catalog(catalog())
        .with_log(MemoryLog::new())
        .add_step(feed)
        .build();
    let chains = DevelopmentChains::default();

    engine.run(&NetworkContext::resolve("hardhat", 31337, &chains), &["all"]).await.unwrap();
    engine.run(&NetworkContext::resolve("localhost", 31337, &chains), &["all"]).await.unwrap();

    assert_eq!(engine.backend().requests().len(), 2);
    assert_eq!(engine.registry().list("hardhat").unwrap().len(), 1);
    assert_eq!(engine.registry().list("localhost").unwrap().len(), 1);
}
