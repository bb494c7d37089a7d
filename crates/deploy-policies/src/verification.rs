//! Clasificación de fallos del servicio de verificación.
//!
//! El servicio externo sólo expone un mensaje de texto. La redacción de ese
//! mensaje no es un contrato estable, así que las reglas viven aquí y se
//! pueden ampliar o reemplazar sin tocar el adaptador.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    AlreadyVerified,
    DeprecatedEndpoint,
    Unknown,
}

pub trait FailureClassifier: Send + Sync {
    fn classify(&self, message: &str) -> VerificationOutcome;
}

/// Reglas `substring -> outcome` evaluadas en orden; gana la primera que
/// aparece en el mensaje (comparación sin distinguir mayúsculas).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringClassifier {
    rules: Vec<(String, VerificationOutcome)>,
}

impl Default for SubstringClassifier {
    fn default() -> Self {
        Self::empty().with_rule("already verified", VerificationOutcome::AlreadyVerified)
                     .with_rule("deprecated v1 endpoint", VerificationOutcome::DeprecatedEndpoint)
    }
}

impl SubstringClassifier {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Añade una regla al final (menor precedencia que las existentes).
    pub fn with_rule(mut self, needle: impl Into<String>, outcome: VerificationOutcome) -> Self {
        self.rules.push((needle.into().to_lowercase(), outcome));
        self
    }

    /// Reemplaza todas las reglas de un outcome por un único needle nuevo,
    /// manteniendo la posición de la primera regla reemplazada.
    pub fn replace_rule(mut self, outcome: VerificationOutcome, needle: impl Into<String>) -> Self {
        let needle = needle.into().to_lowercase();
        match self.rules.iter().position(|(_, o)| *o == outcome) {
            Some(pos) => {
                self.rules[pos].0 = needle;
                let mut idx = 0;
                self.rules.retain(|(_, o)| {
                                      let keep = idx <= pos || *o != outcome;
                                      idx += 1;
                                      keep
                                  });
            }
            None => self.rules.push((needle, outcome)),
        }
        self
    }

    pub fn rules(&self) -> &[(String, VerificationOutcome)] {
        &self.rules
    }
}

impl FailureClassifier for SubstringClassifier {
    fn classify(&self, message: &str) -> VerificationOutcome {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|(needle, _)| lowered.contains(needle.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or(VerificationOutcome::Unknown)
    }
}
