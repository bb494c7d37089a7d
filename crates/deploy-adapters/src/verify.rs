//! Adaptador de verificación de código fuente.
//!
//! Best-effort: `Verifier::verify` nunca falla. Cualquier error del servicio
//! se clasifica por su mensaje y se convierte en líneas de salida.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use deploy_core::{Address, ArgValue, DeployLog};
use deploy_policies::{FailureClassifier, SubstringClassifier, VerificationOutcome, SEPARATOR};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ALREADY_VERIFIED: &str = "Already verified!";
pub const DEPRECATION_WARNING: &str = "Warning: Automatic verification failed due to Etherscan V1 API deprecation.";
pub const MANUAL_VERIFY_HINT: &str = "Your contract is deployed successfully! You can manually verify it on Etherscan.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub address: Address,
    pub constructor_arguments: Vec<ArgValue>,
}

/// Error opaco del servicio; sólo se inspecciona el mensaje.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct VerificationError {
    pub message: String,
}

impl VerificationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn verify(&self, request: &VerifyRequest) -> Result<(), VerificationError>;
}

/// Líneas que produce cada rama de fallo. `message` sólo aparece en la rama
/// desconocida, sin modificar.
pub fn failure_lines(outcome: &VerificationOutcome, message: &str) -> Vec<String> {
    match outcome {
        VerificationOutcome::AlreadyVerified => vec![ALREADY_VERIFIED.to_string()],
        VerificationOutcome::DeprecatedEndpoint => vec![SEPARATOR.to_string(),
                                                        DEPRECATION_WARNING.to_string(),
                                                        MANUAL_VERIFY_HINT.to_string(),
                                                        SEPARATOR.to_string()],
        VerificationOutcome::Unknown => vec![message.to_string()],
    }
}

#[derive(Clone)]
pub struct Verifier {
    service: Arc<dyn VerificationService>,
    classifier: Arc<dyn FailureClassifier>,
    log: Arc<dyn DeployLog>,
}

impl Verifier {
    /// Verifier con las reglas de clasificación por defecto.
    pub fn new(service: Arc<dyn VerificationService>, log: Arc<dyn DeployLog>) -> Self {
        Self { service,
               classifier: Arc::new(SubstringClassifier::default()),
               log }
    }

    pub fn with_classifier(mut self, classifier: impl FailureClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Registra `address` con sus argumentos de constructor. Un éxito y un
    /// "already verified" son indistinguibles para quien llama.
    pub async fn verify(&self, address: Address, args: &[ArgValue]) {
        info!("Verifying contract...");
        let request = VerifyRequest { address,
                                      constructor_arguments: args.to_vec() };
        match self.service.verify(&request).await {
            Ok(()) => debug!("[verify] {} verified", address),
            Err(e) => {
                let outcome = self.report_failure(&e.message);
                debug!("[verify] {} failed as {:?}", address, outcome);
            }
        }
    }

    /// Clasifica `message` y escribe la rama correspondiente en la salida.
    pub fn report_failure(&self, message: &str) -> VerificationOutcome {
        let outcome = self.classifier.classify(message);
        for line in failure_lines(&outcome, message) {
            self.log.log(&line);
        }
        outcome
    }
}

/// Servicio programable: devuelve los resultados encolados en orden (éxito
/// cuando la cola está vacía) y recuerda cada request.
#[derive(Debug, Default)]
pub struct ScriptedVerificationService {
    outcomes: Mutex<VecDeque<Result<(), VerificationError>>>,
    requests: Mutex<Vec<VerifyRequest>>,
}

impl ScriptedVerificationService {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing_with(message: impl Into<String>) -> Self {
        let svc = Self::default();
        svc.push_failure(message);
        svc
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(VerificationError::new(message)));
    }

    pub fn push_success(&self) {
        self.outcomes.lock().unwrap_or_else(|e| e.into_inner()).push_back(Ok(()));
    }

    pub fn requests(&self) -> Vec<VerifyRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl VerificationService for ScriptedVerificationService {
    async fn verify(&self, request: &VerifyRequest) -> Result<(), VerificationError> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).push(request.clone());
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploy_core::MemoryLog;

    fn verifier(svc: Arc<ScriptedVerificationService>) -> (Verifier, MemoryLog) {
        let out = MemoryLog::new();
        (Verifier::new(svc, Arc::new(out.clone())), out)
    }

    #[tokio::test]
    async fn success_writes_nothing_and_forwards_request() {
        let svc = Arc::new(ScriptedVerificationService::succeeding());
        let (v, out) = verifier(svc.clone());
        let addr = Address::repeat_byte(0xab);

        v.verify(addr, &[ArgValue::uint(7u64)]).await;

        assert!(out.is_empty());
        assert_eq!(svc.requests(),
                   vec![VerifyRequest { address: addr,
                                        constructor_arguments: vec![ArgValue::uint(7u64)] }]);
    }

    #[tokio::test]
    async fn already_verified_logs_single_line() {
        let svc = Arc::new(ScriptedVerificationService::failing_with("Contract source code already verified"));
        let (v, out) = verifier(svc);

        v.verify(Address::ZERO, &[]).await;

        assert_eq!(out.lines(), vec![ALREADY_VERIFIED.to_string()]);
    }

    #[tokio::test]
    async fn deprecated_endpoint_logs_warning_block() {
        let svc = Arc::new(ScriptedVerificationService::failing_with("You are using a DEPRECATED V1 ENDPOINT"));
        let (v, out) = verifier(svc);

        v.verify(Address::ZERO, &[]).await;

        assert_eq!(out.lines(),
                   vec![SEPARATOR.to_string(),
                        DEPRECATION_WARNING.to_string(),
                        MANUAL_VERIFY_HINT.to_string(),
                        SEPARATOR.to_string()]);
    }

    #[tokio::test]
    async fn unknown_failure_logs_raw_message() {
        let svc = Arc::new(ScriptedVerificationService::failing_with("503 Service Unavailable"));
        let (v, out) = verifier(svc);

        v.verify(Address::ZERO, &[]).await;

        assert_eq!(out.lines(), vec!["503 Service Unavailable".to_string()]);
    }

    #[tokio::test]
    async fn custom_classifier_replaces_default_rules() {
        let svc = Arc::new(ScriptedVerificationService::failing_with("Source code already exists"));
        let (v, out) = verifier(svc);
        let v = v.with_classifier(SubstringClassifier::empty().with_rule("already exists",
                                                                         VerificationOutcome::AlreadyVerified));

        v.verify(Address::ZERO, &[]).await;

        assert_eq!(out.lines(), vec![ALREADY_VERIFIED.to_string()]);
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = VerifyRequest { address: Address::ZERO,
                                  constructor_arguments: vec![ArgValue::Bool(true)] };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("constructorArguments").is_some());
        assert_eq!(v["constructorArguments"][0]["type"], "bool");
    }
}
