//! Montos en punto fijo exacto.
//!
//! Los constructores de los contratos mock esperan enteros en la unidad
//! mínima (wei, o el número de decimales del feed). La conversión desde una
//! representación decimal legible es exacta: nunca redondea ni trunca.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WEI_DECIMALS: u8 = 0;
pub const GWEI_DECIMALS: u8 = 9;
pub const ETHER_DECIMALS: u8 = 18;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid character '{ch}' in amount '{value}'")]
    InvalidCharacter { value: String, ch: char },
    #[error("amount '{value}' has more than {decimals} significant decimals")]
    PrecisionLoss { value: String, decimals: u8 },
    #[error("amount '{0}' overflows 256 bits")]
    Overflow(String),
}

/// Monto decimal con su escala. `value` se guarda como texto para que la
/// configuración serializada sea legible ("0.25", "2000").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: String,
    pub decimals: u8,
}

impl Amount {
    pub fn units(value: impl Into<String>, decimals: u8) -> Self {
        Self { value: value.into(), decimals }
    }

    pub fn wei(value: impl Into<String>) -> Self {
        Self::units(value, WEI_DECIMALS)
    }

    pub fn gwei(value: impl Into<String>) -> Self {
        Self::units(value, GWEI_DECIMALS)
    }

    pub fn ether(value: impl Into<String>) -> Self {
        Self::units(value, ETHER_DECIMALS)
    }

    /// Convierte a unidades enteras.
    pub fn to_u256(&self) -> Result<U256, AmountError> {
        parse_fixed(&self.value, self.decimals)
    }
}

/// Convierte `value` (p.ej. "0.25") a entero escalado por `10^decimals`.
///
/// Dígitos fraccionarios más allá de `decimals` sólo se aceptan si son ceros.
pub fn parse_fixed(value: &str, decimals: u8) -> Result<U256, AmountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::Empty);
    }

    // A partir de aquí todo es ASCII: los índices de byte son índices de dígito.
    if let Some(ch) = int_part.chars().chain(frac_part.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(AmountError::InvalidCharacter { value: value.to_string(), ch });
    }

    let scale = decimals as usize;
    let (kept, dropped) = if frac_part.len() > scale { frac_part.split_at(scale) } else { (frac_part, "") };
    if dropped.chars().any(|c| c != '0') {
        return Err(AmountError::PrecisionLoss { value: value.to_string(), decimals });
    }

    let mut digits = String::with_capacity(int_part.len() + scale);
    digits.push_str(int_part);
    digits.push_str(kept);
    for _ in kept.len()..scale {
        digits.push('0');
    }

    let ten = U256::from(10u64);
    let mut acc = U256::ZERO;
    for ch in digits.chars() {
        let d = ch.to_digit(10)
                  .ok_or_else(|| AmountError::InvalidCharacter { value: value.to_string(), ch })?;
        acc = acc.checked_mul(ten)
                 .and_then(|v| v.checked_add(U256::from(d)))
                 .ok_or_else(|| AmountError::Overflow(value.to_string()))?;
    }
    Ok(acc)
}
