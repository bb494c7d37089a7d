//! deploy-persistence
//!
//! Estado durable del despliegue fuera del proceso.
//!
//! Módulos:
//! - `config`: carga de configuración desde .env y variables de entorno.
//! - `file`: registro de despliegues en disco (`<dir>/<network>/<name>.json`).
//! - `error`: errores de IO / serde del registro.

pub mod config;
pub mod error;
pub mod file;

pub use config::{init_dotenv, ConfigError, DeployConfig};
pub use error::PersistenceError;
pub use file::FileDeploymentRegistry;
