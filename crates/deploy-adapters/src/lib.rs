//! deploy-adapters: colaboradores concretos del motor de despliegue.
//!
//! - `verify`: adaptador best-effort del servicio de verificación.
//! - `simulated`: `ChainBackend` en memoria para redes de desarrollo.
//! - `catalog`: artifacts compilados del proyecto.
//! - `steps` / `project`: los scripts `00-deploy-mocks` y `01-deploy-basic-nft`.

pub mod catalog;
pub mod project;
pub mod simulated;
pub mod steps;
pub mod verify;

pub use catalog::{builtin_catalog, BASIC_NFT};
pub use project::project_scripts;
pub use simulated::SimulatedChain;
pub use steps::{BasicNftScript, MocksScript};
pub use verify::{failure_lines, ScriptedVerificationService, VerificationError, VerificationService, Verifier,
                 VerifyRequest, ALREADY_VERIFIED, DEPRECATION_WARNING, MANUAL_VERIFY_HINT};
