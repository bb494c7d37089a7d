use indexmap::IndexMap;

use super::DeploymentRegistry;
use crate::errors::DeployError;
use crate::model::DeploymentRecord;

/// Registro en memoria; conserva el orden de inserción por red.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDeploymentRegistry {
    inner: IndexMap<(String, String), DeploymentRecord>,
}

impl InMemoryDeploymentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl DeploymentRegistry for InMemoryDeploymentRegistry {
    fn get(&self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError> {
        Ok(self.inner.get(&(network.to_string(), name.to_string())).cloned())
    }

    fn save(&mut self, record: DeploymentRecord) -> Result<(), DeployError> {
        let key = (record.network.clone(), record.name.clone());
        self.inner.insert(key, record);
        Ok(())
    }

    fn list(&self, network: &str) -> Result<Vec<DeploymentRecord>, DeployError> {
        Ok(self.inner
               .values()
               .filter(|r| r.network == network)
               .cloned()
               .collect())
    }

    fn remove(&mut self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError> {
        Ok(self.inner.shift_remove(&(network.to_string(), name.to_string())))
    }
}
