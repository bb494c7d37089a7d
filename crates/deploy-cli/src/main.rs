//! `deployflow`: CLI mínima sobre el motor de despliegue.
//!
//! deployflow deploy [--network N] [--tags a,b] [--dir D]
//! deployflow list [--network N] [--dir D]
//! deployflow verify-check --message <TXT>

use std::path::PathBuf;
use std::process::exit;

use deploy_adapters::{builtin_catalog, failure_lines, project_scripts, SimulatedChain};
use deploy_core::{DeployEngine, DeploymentRecord, DeploymentRegistry, StdoutLog};
use deploy_persistence::{init_dotenv, DeployConfig, FileDeploymentRegistry};
use deploy_policies::{FailureClassifier, SubstringClassifier};
use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  deployflow deploy [--network N] [--tags a,b] [--dir D]
  deployflow list [--network N] [--dir D]
  deployflow verify-check --message <TXT>";

const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 3;
const EXIT_DEPLOY: i32 = 5;

/// Opciones comunes; lo no indicado en la línea de comandos sale del entorno.
#[derive(Debug, Default)]
struct Flags {
    network: Option<String>,
    tags: Vec<String>,
    dir: Option<PathBuf>,
    message: Option<String>,
}

fn parse_flags(args: &[String]) -> Result<Flags, String> {
    let mut flags = Flags::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1).cloned().ok_or_else(|| format!("missing value for {flag}"))?;
        match flag {
            "--network" => flags.network = Some(value),
            "--tags" => {
                flags.tags = value.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from).collect()
            }
            "--dir" => flags.dir = Some(PathBuf::from(value)),
            "--message" => flags.message = Some(value),
            other => return Err(format!("unknown flag {other}")),
        }
        i += 2;
    }
    Ok(flags)
}

fn init_tracing() {
    let env_filter = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into())
                                         .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter)
                             .with_target(false)
                             .compact()
                             .init();
}

fn load_config(flags: &Flags) -> DeployConfig {
    let mut cfg = match DeployConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[deployflow] config error: {e}");
            exit(EXIT_CONFIG);
        }
    };
    if let Some(network) = &flags.network {
        cfg.network = network.clone();
    }
    if let Some(dir) = &flags.dir {
        cfg.deployments_dir = dir.clone();
    }
    cfg
}

fn print_records(records: &[DeploymentRecord]) {
    for r in records {
        println!("{}\t{}\t{}\tblock={}\ttx={}", r.name, r.contract, r.address, r.block_number, r.tx_hash);
    }
}

async fn deploy(flags: Flags) {
    let cfg = load_config(&flags);
    let network = cfg.network_context();
    if !network.is_development() {
        warn!("network '{}' has no RPC backend configured; deploying against the simulated chain", network.name);
    }

    let scripts = match project_scripts(&cfg.mock_config(), cfg.development_chains.clone(), None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[deployflow] mock config error: {e}");
            exit(EXIT_CONFIG);
        }
    };
    let registry = FileDeploymentRegistry::new(&cfg.deployments_dir).with_chain_id(cfg.chain_id);
    let mut engine = DeployEngine::builder(SimulatedChain::new(), registry).with_catalog(builtin_catalog())
                                                                            .with_accounts(cfg.accounts())
                                                                            .with_log(StdoutLog)
                                                                            .add_steps(scripts)
                                                                            .build();

    let tags: Vec<&str> = flags.tags.iter().map(String::as_str).collect();
    match engine.run(&network, &tags).await {
        Ok(run_id) => {
            info!("run {} completed: {}", run_id, engine.event_codes(run_id));
            match engine.deployments(&network.name) {
                Ok(records) => print_records(&records),
                Err(e) => {
                    eprintln!("[deployflow] registry error: {e}");
                    exit(EXIT_DEPLOY);
                }
            }
        }
        Err(e) => {
            eprintln!("[deployflow] deployment failed: {e}");
            exit(EXIT_DEPLOY);
        }
    }
}

fn list(flags: Flags) {
    let cfg = load_config(&flags);
    let registry = FileDeploymentRegistry::new(&cfg.deployments_dir);
    match registry.list(&cfg.network) {
        Ok(records) => print_records(&records),
        Err(e) => {
            eprintln!("[deployflow] registry error: {e}");
            exit(EXIT_DEPLOY);
        }
    }
}

fn verify_check(flags: Flags) {
    let Some(message) = flags.message else {
        eprintln!("{USAGE}");
        exit(EXIT_USAGE);
    };
    let outcome = SubstringClassifier::default().classify(&message);
    info!("classified as {:?}", outcome);
    for line in failure_lines(&outcome, &message) {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    init_dotenv();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1).map(String::as_str) else {
        eprintln!("{USAGE}");
        exit(EXIT_USAGE);
    };
    let flags = match parse_flags(&args[2..]) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[deployflow] {e}\n{USAGE}");
            exit(EXIT_USAGE);
        }
    };

    match command {
        "deploy" => deploy(flags).await,
        "list" => list(flags),
        "verify-check" => verify_check(flags),
        _ => {
            eprintln!("{USAGE}");
            exit(EXIT_USAGE);
        }
    }
}
