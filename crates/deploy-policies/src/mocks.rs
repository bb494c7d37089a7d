//! Despliegue de mocks en redes de desarrollo.
//!
//! En una red local no existen el coordinador de aleatoriedad ni el feed de
//! precios; se despliegan stand-ins con argumentos fijos. En cualquier otra
//! red la política no hace nada (ni despliega ni escribe salida).

use std::fmt;
use std::str::FromStr;

use deploy_core::constants::DEPLOYER_ACCOUNT;
use deploy_core::{Amount, AmountError, ArgValue, DeployCtx, DeployError, DeployOptions, DevelopmentChains};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const VRF_COORDINATOR_V2_MOCK: &str = "VRFCoordinatorV2Mock";
pub const VRF_COORDINATOR_V2_5_MOCK: &str = "VRFCoordinatorV2_5Mock";
pub const MOCK_V3_AGGREGATOR: &str = "MockV3Aggregator";

pub const LOCAL_NETWORK_DETECTED: &str = "Local Network Detected! Deploying Mocks...";
pub const MOCKS_DEPLOYED: &str = "Mocks Deployed!";
pub const SEPARATOR: &str = "------------------------------------------------";

/// Firma del constructor del coordinador mock. La librería de mocks cambió
/// de `(baseFee, gasPriceLink)` a `(baseFee, gasPrice, weiPerUnitLink)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatorVariant {
    V2,
    #[default]
    V2_5,
}

impl CoordinatorVariant {
    pub fn contract(&self) -> &'static str {
        match self {
            Self::V2 => VRF_COORDINATOR_V2_MOCK,
            Self::V2_5 => VRF_COORDINATOR_V2_5_MOCK,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown coordinator variant '{0}' (expected v2 or v2_5)")]
pub struct UnknownVariant(pub String);

impl FromStr for CoordinatorVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" => Ok(Self::V2),
            "v2_5" | "v2.5" | "v25" => Ok(Self::V2_5),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for CoordinatorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::V2_5 => f.write_str("v2_5"),
        }
    }
}

/// Parámetros de los mocks. Se pasa explícitamente a cada invocación para
/// que cada red o harness de test pueda sobrescribirlos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockConfig {
    pub coordinator: CoordinatorVariant,
    /// Premium por request (0.25 LINK).
    pub base_fee: Amount,
    /// Precio de gas en LINK (1e9).
    pub gas_price_link: Amount,
    /// Sólo variante V2_5.
    pub wei_per_unit_link: Amount,
    pub aggregator_decimals: u8,
    /// Precio inicial del feed, escalado por `aggregator_decimals`.
    pub initial_answer: String,
    pub log_deployments: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { coordinator: CoordinatorVariant::default(),
               base_fee: Amount::ether("0.25"),
               gas_price_link: Amount::gwei("1"),
               wei_per_unit_link: Amount::ether("1"),
               aggregator_decimals: 18,
               initial_answer: "2000".to_string(),
               log_deployments: true }
    }
}

impl MockConfig {
    pub fn with_coordinator(mut self, coordinator: CoordinatorVariant) -> Self {
        self.coordinator = coordinator;
        self
    }
}

/// Un mock a desplegar: nombre, contrato y argumentos ya convertidos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockStep {
    pub name: String,
    pub contract: String,
    pub args: Vec<ArgValue>,
    pub log: bool,
}

/// Arma los mocks en orden de despliegue: coordinador y luego feed de precios.
pub fn mock_steps(config: &MockConfig) -> Result<Vec<MockStep>, AmountError> {
    let base_fee = ArgValue::Uint(config.base_fee.to_u256()?);
    let gas_price = ArgValue::Uint(config.gas_price_link.to_u256()?);
    let coordinator_args = match config.coordinator {
        CoordinatorVariant::V2 => vec![base_fee, gas_price],
        CoordinatorVariant::V2_5 => vec![base_fee, gas_price, ArgValue::Uint(config.wei_per_unit_link.to_u256()?)],
    };
    let answer = Amount::units(config.initial_answer.clone(), config.aggregator_decimals).to_u256()?;

    let coordinator = config.coordinator.contract();
    Ok(vec![MockStep { name: coordinator.to_string(),
                       contract: coordinator.to_string(),
                       args: coordinator_args,
                       log: config.log_deployments },
            MockStep { name: MOCK_V3_AGGREGATOR.to_string(),
                       contract: MOCK_V3_AGGREGATOR.to_string(),
                       args: vec![ArgValue::uint(config.aggregator_decimals as u64), ArgValue::Uint(answer)],
                       log: config.log_deployments }])
}

/// Despliega `steps` en orden si la red activa está en `allowlist`.
///
/// Fuera de la allowlist no hace nada. Cualquier error de despliegue se
/// devuelve sin modificar y los mocks siguientes no se despliegan.
pub async fn maybe_deploy_mocks(ctx: &mut DeployCtx<'_>,
                                allowlist: &DevelopmentChains,
                                steps: &[MockStep])
                                -> Result<(), DeployError> {
    if !allowlist.contains(&ctx.network().name) {
        debug!("network '{}' not in development chains; mocks skipped", ctx.network().name);
        return Ok(());
    }
    let deployer = ctx.named_account(DEPLOYER_ACCOUNT)?;

    ctx.log(LOCAL_NETWORK_DETECTED);
    for step in steps {
        let options = DeployOptions::new(deployer).contract(step.contract.clone())
                                                  .args(step.args.clone())
                                                  .log(step.log);
        ctx.deploy(&step.name, options).await?;
    }
    ctx.log(MOCKS_DEPLOYED);
    ctx.log(SEPARATOR);
    Ok(())
}
