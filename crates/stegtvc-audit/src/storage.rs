//! Chainlog storage backends.

use crate::error::AuditError;
use crate::event::ChainEvent;
use async_trait::async_trait;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Trait for chainlog storage backends.
#[async_trait]
pub trait AuditStorage: Send + Sync {
    /// Append one event. Must never rewrite or truncate prior events.
    async fn store(&self, event: &ChainEvent) -> Result<(), AuditError>;

    /// Read back all stored events in append order.
    async fn read_all(&self) -> Result<Vec<ChainEvent>, AuditError>;
}

/// File storage: appends newline-delimited JSON to a log file.
///
/// The containing directory is created on first use and the file is
/// created lazily on first append. Each event is a single short
/// append-mode write, and the handle is released on every exit path.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AuditError::InitializationFailed(format!(
                        "cannot create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        Ok(Self { path })
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AuditStorage for FileStorage {
    async fn store(&self, event: &ChainEvent) -> Result<(), AuditError> {
        let json = serde_json::to_string(event)?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{json}")?;
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<ChainEvent>, AuditError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut events = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            events.push(serde_json::from_str(&line)?);
        }
        Ok(events)
    }
}

/// Console storage: prints one JSON line per event to stdout.
pub struct ConsoleStorage;

#[async_trait]
impl AuditStorage for ConsoleStorage {
    async fn store(&self, event: &ChainEvent) -> Result<(), AuditError> {
        println!("{}", serde_json::to_string(event)?);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<ChainEvent>, AuditError> {
        Ok(Vec::new())
    }
}

/// Null storage: discards everything. Used by the disabled logger.
pub struct NullStorage;

#[async_trait]
impl AuditStorage for NullStorage {
    async fn store(&self, _event: &ChainEvent) -> Result<(), AuditError> {
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<ChainEvent>, AuditError> {
        Ok(Vec::new())
    }
}
