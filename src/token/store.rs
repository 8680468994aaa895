use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
#[cfg(test)]
use parking_lot::RwLock;

/// Key the session token lives under.
pub(crate) const TOKEN_KEY: &str = "token";

/// A single persistent slot for the session token.
pub(crate) trait TokenStore: Send + Sync {
    fn read(&self) -> std::io::Result<Option<String>>;

    fn write(&self, token: &str) -> std::io::Result<()>;

    /// Removing an absent token is not an error.
    fn remove(&self) -> std::io::Result<()>;
}

/// In-process slot, used where nothing should touch the disk.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    slot: RwLock<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl TokenStore for MemoryStore {
    fn read(&self) -> std::io::Result<Option<String>> {
        Ok(self.slot.read().clone())
    }

    fn write(&self, token: &str) -> std::io::Result<()> {
        *self.slot.write() = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> std::io::Result<()> {
        self.slot.write().take();
        Ok(())
    }
}

/// Keeps the token in `<dir>/token`.
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub(crate) fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_KEY),
            lock: Mutex::new(()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileStore {
    fn read(&self) -> std::io::Result<Option<String>> {
        let _guard = self.lock.lock();

        match std::fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, token: &str) -> std::io::Result<()> {
        let _guard = self.lock.lock();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, token)
    }

    fn remove(&self) -> std::io::Result<()> {
        let _guard = self.lock.lock();

        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
