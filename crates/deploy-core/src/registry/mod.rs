//! Registro de despliegues con nombre.
//!
//! Clave `(network, name)`, una entrada por clave. El motor lo consulta antes
//! de desplegar (para reutilizar artifacts sin cambios) y escribe en él tras
//! cada despliegue real; ningún otro estado se persiste.

mod memory;

pub use memory::InMemoryDeploymentRegistry;

use crate::errors::DeployError;
use crate::model::DeploymentRecord;

pub trait DeploymentRegistry: Send + Sync {
    /// Registro para `(network, name)` si existe.
    fn get(&self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError>;
    /// Inserta o reemplaza la entrada de `record.key()`.
    fn save(&mut self, record: DeploymentRecord) -> Result<(), DeployError>;
    /// Registros de una red.
    fn list(&self, network: &str) -> Result<Vec<DeploymentRecord>, DeployError>;
    /// Elimina la entrada y la devuelve.
    fn remove(&mut self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError>;
}
