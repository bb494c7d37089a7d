//! `01-deploy-basic-nft`: despliega `BasicNft` (constructor sin argumentos)
//! y, fuera de las redes de desarrollo, intenta verificar el código fuente.

use async_trait::async_trait;
use deploy_core::constants::DEPLOYER_ACCOUNT;
use deploy_core::{DeployCtx, DeployError, DeployOptions, DeployStep};
use deploy_policies::SEPARATOR;
use log::debug;

use crate::catalog::BASIC_NFT;
use crate::verify::Verifier;

#[derive(Default)]
pub struct BasicNftScript {
    verifier: Option<Verifier>,
}

impl BasicNftScript {
    pub const ID: &'static str = "01-deploy-basic-nft";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verifier(mut self, verifier: Verifier) -> Self {
        self.verifier = Some(verifier);
        self
    }
}

#[async_trait]
impl DeployStep for BasicNftScript {
    fn id(&self) -> &str {
        Self::ID
    }

    fn tags(&self) -> Vec<&str> {
        vec!["all", "basicnft"]
    }

    async fn run(&self, ctx: &mut DeployCtx<'_>) -> Result<(), DeployError> {
        let deployer = ctx.named_account(DEPLOYER_ACCOUNT)?;
        ctx.log(SEPARATOR);
        let record = ctx.deploy(BASIC_NFT, DeployOptions::new(deployer).log(true)).await?;

        if ctx.network().is_development() {
            return Ok(());
        }
        match &self.verifier {
            Some(verifier) => verifier.verify(record.address, &record.args).await,
            None => debug!("[basic-nft] no verifier configured; {} left unverified", record.address),
        }
        Ok(())
    }
}
