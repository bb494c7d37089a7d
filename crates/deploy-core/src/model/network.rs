//! Contexto de red.
//!
//! El nombre simbólico de la red activa y si pertenece al conjunto de redes
//! de desarrollo. Se construye una vez por ejecución y no se muta.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEVELOPMENT_CHAINS, LOCAL_CHAIN_ID};

/// Allowlist estática de redes de desarrollo. La pertenencia es exacta
/// (sensible a mayúsculas), igual que el `includes` de una lista de nombres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentChains(Vec<String>);

impl DevelopmentChains {
    pub fn new<I, S>(names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, network: &str) -> bool {
        self.0.iter().any(|n| n == network)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for DevelopmentChains {
    fn default() -> Self {
        Self::new(DEFAULT_DEVELOPMENT_CHAINS.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkContext {
    pub name: String,
    pub chain_id: u64,
    pub development: bool,
}

impl NetworkContext {
    /// Determina si `name` es red de desarrollo consultando la allowlist.
    pub fn resolve(name: impl Into<String>, chain_id: u64, allowlist: &DevelopmentChains) -> Self {
        let name = name.into();
        let development = allowlist.contains(&name);
        Self { name, chain_id, development }
    }

    /// Red `hardhat` con el chain id local.
    pub fn local() -> Self {
        Self::resolve("hardhat", LOCAL_CHAIN_ID, &DevelopmentChains::default())
    }

    pub fn is_development(&self) -> bool {
        self.development
    }
}
