//! deploy-policies – políticas de despliegue y de verificación
//!
//! - `mocks`: despliegue condicional de contratos mock según la red activa,
//!   con argumentos de constructor armados desde una configuración explícita.
//! - `verification`: clasificación de fallos del servicio de verificación
//!   (reglas intercambiables sin tocar el adaptador que llama al servicio).

pub mod mocks;
pub mod verification;

pub use mocks::{maybe_deploy_mocks, mock_steps, CoordinatorVariant, MockConfig, MockStep, UnknownVariant,
                LOCAL_NETWORK_DETECTED, MOCKS_DEPLOYED, MOCK_V3_AGGREGATOR, SEPARATOR, VRF_COORDINATOR_V2_5_MOCK,
                VRF_COORDINATOR_V2_MOCK};
pub use verification::{FailureClassifier, SubstringClassifier, VerificationOutcome};
