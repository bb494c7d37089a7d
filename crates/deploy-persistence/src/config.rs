//! Carga de configuración de despliegue desde variables de entorno.
//! Convención: `DEPLOY_NETWORK`, `DEVELOPMENT_CHAINS`, `DEPLOYMENTS_DIR`,
//! `CHAIN_ID`, `DEPLOYER_ADDRESS` y `MOCK_COORDINATOR`.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::Address;
use deploy_core::constants::{DEFAULT_DEVELOPMENT_CHAINS, DEPLOYER_ACCOUNT, LOCAL_CHAIN_ID};
use deploy_core::{DevelopmentChains, NamedAccounts, NetworkContext};
use deploy_policies::{CoordinatorVariant, MockConfig};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use thiserror::Error;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_NETWORK: &str = "hardhat";
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "deployments";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}='{value}': {reason}")]
    Invalid { var: &'static str, value: String, reason: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub network: String,
    pub development_chains: DevelopmentChains,
    pub deployments_dir: PathBuf,
    pub chain_id: u64,
    /// Sustituye la cuenta `deployer` por defecto.
    pub deployer: Option<Address>,
    pub coordinator: CoordinatorVariant,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self { network: DEFAULT_NETWORK.to_string(),
               development_chains: DevelopmentChains::default(),
               deployments_dir: PathBuf::from(DEFAULT_DEPLOYMENTS_DIR),
               chain_id: LOCAL_CHAIN_ID,
               deployer: None,
               coordinator: CoordinatorVariant::default() }
    }
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de `lookup`; variables ausentes o
    /// vacías toman el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let network = get("DEPLOY_NETWORK").unwrap_or(defaults.network);
        let development_chains = match get("DEVELOPMENT_CHAINS") {
            Some(raw) => parse_chains(&raw)?,
            None => DevelopmentChains::new(DEFAULT_DEVELOPMENT_CHAINS.iter().copied()),
        };
        let deployments_dir = get("DEPLOYMENTS_DIR").map(PathBuf::from).unwrap_or(defaults.deployments_dir);
        let chain_id = match get("CHAIN_ID") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid { var: "CHAIN_ID",
                                                                                value: raw.clone(),
                                                                                reason: e.to_string() })?,
            None => defaults.chain_id,
        };
        let deployer = match get("DEPLOYER_ADDRESS") {
            Some(raw) => Some(Address::from_str(&raw).map_err(|e| ConfigError::Invalid { var: "DEPLOYER_ADDRESS",
                                                                                          value: raw.clone(),
                                                                                          reason: e.to_string() })?),
            None => None,
        };
        let coordinator = match get("MOCK_COORDINATOR") {
            Some(raw) => raw.parse::<CoordinatorVariant>().map_err(|e| ConfigError::Invalid { var: "MOCK_COORDINATOR",
                                                                                               value: raw.clone(),
                                                                                               reason: e.to_string() })?,
            None => defaults.coordinator,
        };

        Ok(Self { network, development_chains, deployments_dir, chain_id, deployer, coordinator })
    }

    pub fn network_context(&self) -> NetworkContext {
        NetworkContext::resolve(self.network.clone(), self.chain_id, &self.development_chains)
    }

    pub fn mock_config(&self) -> MockConfig {
        MockConfig::default().with_coordinator(self.coordinator)
    }

    pub fn accounts(&self) -> NamedAccounts {
        match self.deployer {
            Some(address) => NamedAccounts::empty().with(DEPLOYER_ACCOUNT, address),
            None => NamedAccounts::default(),
        }
    }
}

fn parse_chains(raw: &str) -> Result<DevelopmentChains, ConfigError> {
    let names: Vec<&str> = raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    if names.is_empty() {
        return Err(ConfigError::Empty("DEVELOPMENT_CHAINS"));
    }
    Ok(DevelopmentChains::new(names))
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
