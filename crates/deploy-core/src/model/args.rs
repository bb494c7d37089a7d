//! Argumentos de constructor.
//!
//! Una lista ordenada de valores que debe coincidir exactamente con la firma
//! del constructor del contrato. `DeploymentRef` es el único placeholder
//! permitido: se resuelve contra el registro antes de ejecutar el despliegue.

use std::fmt;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::errors::DeployError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ArgValue {
    Address(Address),
    Uint(#[serde(with = "u256_decimal")] U256),
    Int(i64),
    Bool(bool),
    Bytes(Bytes),
    Str(String),
    /// Dirección de otro despliegue (por nombre) en la misma red.
    DeploymentRef(String),
}

impl ArgValue {
    pub fn uint(v: u64) -> Self {
        Self::Uint(U256::from(v))
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::DeploymentRef(_))
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(a) => write!(f, "{a}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::DeploymentRef(name) => write!(f, "<{name}>"),
        }
    }
}

/// `true` si ningún argumento es un placeholder.
pub fn args_resolved(args: &[ArgValue]) -> bool {
    args.iter().all(ArgValue::is_resolved)
}

/// Sustituye cada `DeploymentRef` por la dirección que devuelve `lookup`.
pub fn resolve_args<F>(args: &[ArgValue], mut lookup: F) -> Result<Vec<ArgValue>, DeployError>
    where F: FnMut(&str) -> Result<Option<Address>, DeployError>
{
    args.iter()
        .map(|a| match a {
            ArgValue::DeploymentRef(name) => match lookup(name)? {
                Some(address) => Ok(ArgValue::Address(address)),
                None => Err(DeployError::UnresolvedArgument { reference: name.clone() }),
            },
            other => Ok(other.clone()),
        })
        .collect()
}

/// U256 como string decimal en JSON (los artifacts en disco quedan legibles).
mod u256_decimal {
    use std::str::FromStr;

    use alloy_primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &U256, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&v.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(d)?;
        U256::from_str(&raw).map_err(D::Error::custom)
    }
}
