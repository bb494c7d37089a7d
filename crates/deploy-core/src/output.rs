//! Salida legible para humanos.
//!
//! Los mensajes de progreso ("Local Network Detected! ...") son parte del
//! contrato observable y pasan por un `DeployLog`. Los diagnósticos internos
//! usan el facade `log` y no pasan por aquí.

use std::sync::{Arc, Mutex};

pub trait DeployLog: Send + Sync {
    fn log(&self, line: &str);
}

/// Escribe cada línea en stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLog;

impl DeployLog for StdoutLog {
    fn log(&self, line: &str) {
        println!("{line}");
    }
}

/// Descarta todo.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentLog;

impl DeployLog for SilentLog {
    fn log(&self, _line: &str) {}
}

/// Captura en memoria; los clones comparten el buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl DeployLog for MemoryLog {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).push(line.to_string());
    }
}
