//! Artifacts compilados conocidos por el proyecto.

use deploy_core::hashing::hash_str;
use deploy_core::{ArtifactCatalog, ContractArtifact};
use deploy_policies::{MOCK_V3_AGGREGATOR, VRF_COORDINATOR_V2_5_MOCK, VRF_COORDINATOR_V2_MOCK};

pub const BASIC_NFT: &str = "BasicNft";

/// Fuente de cada contrato; su hash hace de bytecode hash del artifact.
const SOURCES: &[(&str, &str)] = &[(VRF_COORDINATOR_V2_MOCK, "test/VRFCoordinatorV2Mock.sol"),
                                   (VRF_COORDINATOR_V2_5_MOCK, "test/VRFCoordinatorV2_5Mock.sol"),
                                   (MOCK_V3_AGGREGATOR, "test/MockV3Aggregator.sol"),
                                   (BASIC_NFT, "BasicNft.sol")];

pub fn builtin_catalog() -> ArtifactCatalog {
    SOURCES.iter().fold(ArtifactCatalog::new(), |catalog, (contract, source)| {
                      catalog.with(ContractArtifact::new(*contract, hash_str(source)))
                  })
}
