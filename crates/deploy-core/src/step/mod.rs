//! Steps de despliegue.
//!
//! Un step es un script con nombre y etiquetas (`"all"`, `"mocks"`, ...). El
//! runner selecciona steps por etiqueta y los ejecuta en orden de
//! declaración. Este módulo define:
//! - `DeployStep`: interfaz usada por el engine.
//! - `select_steps`: selección por etiquetas con dependencias transitivas.

pub mod definition;
pub mod selection;

pub use definition::DeployStep;
pub use selection::{definition_hash, select_steps};
