//! Lista ordenada de scripts del proyecto.

use deploy_core::{AmountError, DeployStep, DevelopmentChains};
use deploy_policies::MockConfig;

use crate::steps::{BasicNftScript, MocksScript};
use crate::verify::Verifier;

pub fn project_scripts(config: &MockConfig,
                       allowlist: DevelopmentChains,
                       verifier: Option<Verifier>)
                       -> Result<Vec<Box<dyn DeployStep>>, AmountError> {
    let nft = match verifier {
        Some(v) => BasicNftScript::new().with_verifier(v),
        None => BasicNftScript::new(),
    };
    Ok(vec![Box::new(MocksScript::new(config, allowlist)?), Box::new(nft)])
}
