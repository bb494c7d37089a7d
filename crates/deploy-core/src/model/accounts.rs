//! Cuentas nombradas (`deployer`, ...) resueltas a direcciones.

use alloy_primitives::{address, Address};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::DEPLOYER_ACCOUNT;
use crate::errors::DeployError;

/// Primera cuenta prefinanciada del simulador local.
pub const LOCAL_DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAccounts(IndexMap<String, Address>);

impl NamedAccounts {
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    pub fn with(mut self, name: impl Into<String>, address: Address) -> Self {
        self.0.insert(name.into(), address);
        self
    }

    pub fn get(&self, name: &str) -> Result<Address, DeployError> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| DeployError::NamedAccountMissing(name.to_string()))
    }
}

impl Default for NamedAccounts {
    fn default() -> Self {
        Self::empty().with(DEPLOYER_ACCOUNT, LOCAL_DEPLOYER)
    }
}
