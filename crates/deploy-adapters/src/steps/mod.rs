//! Scripts de despliegue del proyecto, en el orden en que se ejecutan.

pub mod basic_nft;
pub mod mocks;

pub use basic_nft::BasicNftScript;
pub use mocks::MocksScript;
