use async_trait::async_trait;

use crate::engine::DeployCtx;
use crate::errors::DeployError;
use crate::model::NetworkContext;

/// Trait que define un step de despliegue.
#[async_trait]
pub trait DeployStep: Send + Sync {
    /// Identificador estable y único dentro del conjunto de scripts.
    fn id(&self) -> &str;

    /// Etiquetas por las que el runner puede seleccionar el step.
    fn tags(&self) -> Vec<&str>;

    /// Etiquetas que deben ejecutarse antes (se agregan a la selección).
    fn dependencies(&self) -> Vec<&str> {
        Vec::new()
    }

    /// `true` si el step no aplica a la red activa. El engine lo registra
    /// como `StepSkipped` sin llamar a `run`.
    fn skip(&self, _network: &NetworkContext) -> bool {
        false
    }

    async fn run(&self, ctx: &mut DeployCtx<'_>) -> Result<(), DeployError>;
}
