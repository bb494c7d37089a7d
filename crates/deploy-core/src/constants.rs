//! Constantes del motor de despliegue.
//!
//! Estos valores participan en el cálculo de fingerprints. Cambiar
//! `ENGINE_VERSION` invalida todos los fingerprints existentes y obliga a
//! redeplegar aunque ni los argumentos ni el bytecode hayan cambiado.

/// Versión lógica del motor. Forma parte del input de cada fingerprint.
pub const ENGINE_VERSION: &str = "D1.0";

/// Redes de desarrollo por defecto (simuladores locales / efímeros).
pub const DEFAULT_DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

/// Chain id usado por el simulador local.
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Nombre de la cuenta con la que se despliega por defecto.
pub const DEPLOYER_ACCOUNT: &str = "deployer";
