use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::error::{Error, Result};

/// Destination for encoded cards. A name identifies one artifact; storing the
/// same name twice overwrites.
pub trait Sink: Send + Sync {
    fn store(&self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }
}

impl Sink for DirectorySink {
    fn store(&self, name: &str, bytes: &[u8]) -> Result<()> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(Error::InvalidArgument {
                arg: "name",
                value: name.to_string(),
            });
        }
        let path = self.path_for(name);
        std::fs::write(&path, bytes)?;
        debug!("Stored {} bytes at {:?}", bytes.len(), path);
        Ok(())
    }
}

/// Keeps encoded cards in memory, keyed by name.
#[derive(Debug, Default)]
pub struct MemorySink {
    images: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn images(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.images
            .lock()
            .map_err(|_| std::io::Error::other("memory sink lock poisoned").into())
    }

    /// Bytes stored under `name`, `None` if nothing was stored.
    pub fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.images()?.get(name).cloned())
    }

    pub fn names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.images()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl Sink for MemorySink {
    fn store(&self, name: &str, bytes: &[u8]) -> Result<()> {
        self.images()?.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}
