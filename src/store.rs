//! Single-file persistence for [`Container`] graphs.
//!
//! `create` opens in overwrite mode (any pre-existing file at the path is
//! replaced), `open` re-reads an existing artifact, and the consuming
//! [`ContainerFile::close`] validates and flushes exactly once. If a handle
//! is dropped without being closed (the early-failure path), `Drop` still
//! flushes best-effort so the backing store is never left inconsistent.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::VaultError;
use crate::model::Container;

/// An open container bound to its backing file.
#[derive(Debug)]
pub struct ContainerFile {
    path: PathBuf,
    container: Container,
    closed: bool,
}

impl ContainerFile {
    /// Create a fresh container at `path`, replacing any existing file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let path = path.into();
        let file = ContainerFile {
            path,
            container: Container::new(),
            closed: false,
        };
        // Claim the path up front so overwrite failures surface before
        // any generation work runs.
        file.flush()?;
        info!("[Store] Created container at {:?}", file.path);
        Ok(file)
    }

    /// Re-open a persisted container for reading.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let path = path.into();
        let contents = fs::read_to_string(&path).map_err(|source| VaultError::Io {
            context: format!("reading container file {}", path.display()),
            source,
        })?;
        let container: Container = serde_json::from_str(&contents)?;
        info!(
            "[Store] Opened container at {:?} ({} blocks)",
            path,
            container.blocks.len()
        );
        Ok(ContainerFile {
            path,
            container,
            closed: true, // read-only view, nothing pending to flush
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        self.closed = false;
        &mut self.container
    }

    /// Validate the graph, flush it, and consume the handle.
    pub fn close(mut self) -> Result<(), VaultError> {
        self.container.validate()?;
        self.flush()?;
        self.closed = true;
        info!("[Store] Closed container at {:?}", self.path);
        Ok(())
    }

    fn flush(&self) -> Result<(), VaultError> {
        let document = serde_json::to_string_pretty(&self.container)?;
        fs::write(&self.path, document).map_err(|source| VaultError::Io {
            context: format!("writing container file {}", self.path.display()),
            source,
        })
    }
}

impl Drop for ContainerFile {
    fn drop(&mut self) {
        if !self.closed {
            warn!(
                "[Store] Container at {:?} dropped without close(), flushing",
                self.path
            );
            if let Err(err) = self.flush() {
                warn!("[Store] Final flush failed: {}", err);
            }
        }
    }
}
