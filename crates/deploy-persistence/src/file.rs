//! Registro de despliegues en disco.
//!
//! Layout: `<root>/<network>/<name>.json` (JSON legible) y un archivo
//! `<root>/<network>/.chainId` escrito la primera vez que se guarda en esa
//! red. Cada escritura va a un temporal y se renombra.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use deploy_core::{DeployError, DeploymentRecord, DeploymentRegistry};
use log::debug;

use crate::error::PersistenceError;

const CHAIN_ID_FILE: &str = ".chainId";

#[derive(Debug, Clone)]
pub struct FileDeploymentRegistry {
    root: PathBuf,
    chain_id: Option<u64>,
}

impl FileDeploymentRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), chain_id: None }
    }

    /// Chain id a registrar en cada red nueva.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Chain id guardado para `network`, si existe.
    pub fn chain_id(&self, network: &str) -> Result<Option<u64>, PersistenceError> {
        let path = self.network_dir(network)?.join(CHAIN_ID_FILE);
        let Some(raw) = read_optional(&path)? else {
            return Ok(None);
        };
        raw.trim()
           .parse::<u64>()
           .map(Some)
           .map_err(|e| PersistenceError::Corrupt { path, reason: e.to_string() })
    }

    pub fn read(&self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, PersistenceError> {
        let path = self.record_path(network, name)?;
        match read_optional(&path)? {
            Some(raw) => parse_record(&path, &raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn write(&self, record: &DeploymentRecord) -> Result<PathBuf, PersistenceError> {
        let dir = self.network_dir(&record.network)?;
        fs::create_dir_all(&dir).map_err(|e| PersistenceError::io(&dir, e))?;
        if let Some(chain_id) = self.chain_id {
            let marker = dir.join(CHAIN_ID_FILE);
            if !marker.exists() {
                write_atomic(&marker, chain_id.to_string().as_bytes())?;
            }
        }
        let path = self.record_path(&record.network, &record.name)?;
        let json = serde_json::to_string_pretty(record)?;
        write_atomic(&path, json.as_bytes())?;
        debug!("[file-registry] wrote {}", path.display());
        Ok(path)
    }

    /// Registros de `network` ordenados por fecha de despliegue y nombre.
    pub fn read_all(&self, network: &str) -> Result<Vec<DeploymentRecord>, PersistenceError> {
        let dir = self.network_dir(network)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PersistenceError::io(&dir, e)),
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| PersistenceError::io(&dir, e))?.path();
            if path.extension().and_then(|x| x.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path).map_err(|e| PersistenceError::io(&path, e))?;
            records.push(parse_record(&path, &raw)?);
        }
        records.sort_by(|a, b| a.deployed_at.cmp(&b.deployed_at).then_with(|| a.name.cmp(&b.name)));
        Ok(records)
    }

    pub fn delete(&self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, PersistenceError> {
        let existing = self.read(network, name)?;
        if existing.is_some() {
            let path = self.record_path(network, name)?;
            fs::remove_file(&path).map_err(|e| PersistenceError::io(&path, e))?;
        }
        Ok(existing)
    }

    fn network_dir(&self, network: &str) -> Result<PathBuf, PersistenceError> {
        Ok(self.root.join(checked_component(network)?))
    }

    fn record_path(&self, network: &str, name: &str) -> Result<PathBuf, PersistenceError> {
        Ok(self.network_dir(network)?.join(format!("{}.json", checked_component(name)?)))
    }
}

impl DeploymentRegistry for FileDeploymentRegistry {
    fn get(&self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError> {
        Ok(self.read(network, name)?)
    }

    fn save(&mut self, record: DeploymentRecord) -> Result<(), DeployError> {
        self.write(&record)?;
        Ok(())
    }

    fn list(&self, network: &str) -> Result<Vec<DeploymentRecord>, DeployError> {
        Ok(self.read_all(network)?)
    }

    fn remove(&mut self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError> {
        Ok(self.delete(network, name)?)
    }
}

/// Nombres de red y de despliegue se usan como componentes de ruta.
fn checked_component(value: &str) -> Result<&str, PersistenceError> {
    let invalid = value.is_empty()
                  || value == "."
                  || value == ".."
                  || value.starts_with('.')
                  || value.contains(['/', '\\', '\0']);
    if invalid {
        return Err(PersistenceError::InvalidName(value.to_string()));
    }
    Ok(value)
}

fn read_optional(path: &Path) -> Result<Option<String>, PersistenceError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PersistenceError::io(path, e)),
    }
}

fn parse_record(path: &Path, raw: &str) -> Result<DeploymentRecord, PersistenceError> {
    serde_json::from_str(raw).map_err(|e| PersistenceError::Corrupt { path: path.to_path_buf(),
                                                                     reason: e.to_string() })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    let tmp = path.with_extension("tmp");
    let result = fs::write(&tmp, bytes).map_err(|e| PersistenceError::io(&tmp, e))
                                       .and_then(|()| fs::rename(&tmp, path).map_err(|e| PersistenceError::io(path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
