//! `00-deploy-mocks`: stand-ins locales del coordinador VRF y del feed de
//! precios. Sólo despliega en redes de la allowlist de desarrollo.

use async_trait::async_trait;
use deploy_core::{AmountError, DeployCtx, DeployError, DeployStep, DevelopmentChains};
use deploy_policies::{maybe_deploy_mocks, mock_steps, MockConfig, MockStep};

pub struct MocksScript {
    allowlist: DevelopmentChains,
    steps: Vec<MockStep>,
}

impl MocksScript {
    pub const ID: &'static str = "00-deploy-mocks";

    /// Convierte los importes de `config` una sola vez, al registrar el script.
    pub fn new(config: &MockConfig, allowlist: DevelopmentChains) -> Result<Self, AmountError> {
        Ok(Self { allowlist,
                  steps: mock_steps(config)? })
    }

    pub fn steps(&self) -> &[MockStep] {
        &self.steps
    }
}

#[async_trait]
impl DeployStep for MocksScript {
    fn id(&self) -> &str {
        Self::ID
    }

    fn tags(&self) -> Vec<&str> {
        vec!["all", "mocks"]
    }

    async fn run(&self, ctx: &mut DeployCtx<'_>) -> Result<(), DeployError> {
        maybe_deploy_mocks(ctx, &self.allowlist, &self.steps).await
    }
}
