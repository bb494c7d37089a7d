//! Engine de despliegue.
//!
//! Provee el motor, su builder y el contexto que recibe cada step.

pub mod builder;
pub mod core;
pub mod ctx;

pub use builder::EngineBuilder;
pub use self::core::DeployEngine;
pub use ctx::{DeployCtx, DeployOptions};
