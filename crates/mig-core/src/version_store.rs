//! Durable storage for the current version [`Marker`].
//!
//! The engine is the only writer. Implementations must make a `write`
//! visible to the next `read` in the same process.

use crate::error::{CoreError, CoreResult};
use crate::version::Marker;
use std::cell::Cell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read/write access to the persisted version marker.
pub trait VersionStore {
    /// Current marker. A store with no persisted state reports
    /// [`Marker::Empty`].
    fn read(&self) -> CoreResult<Marker>;

    /// Replace the persisted marker.
    fn write(&self, marker: Marker) -> CoreResult<()>;
}

/// Marker persisted as plain text in a single file.
#[derive(Debug, Clone)]
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionStore for FileVersionStore {
    /// A missing marker file is created empty and read as
    /// [`Marker::Empty`]; failure to create it is logged and ignored.
    /// An existing file is never rewritten here: unreadable or non-marker
    /// content is an error.
    fn read(&self) -> CoreResult<Marker> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let created = fs::OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&self.path);
                if let Err(create_err) = created {
                    log::warn!(
                        "Failed to create version file {}: {}",
                        self.path.display(),
                        create_err
                    );
                }
                return Ok(Marker::Empty);
            }
            Err(e) => return Err(CoreError::io(&self.path, e)),
        };

        let invalid = |content: &str| CoreError::InvalidMarker {
            path: self.path.display().to_string(),
            content: content.trim().to_string(),
        };
        let content = String::from_utf8(bytes)
            .map_err(|e| invalid(&String::from_utf8_lossy(e.as_bytes())))?;
        Marker::parse(&content).ok_or_else(|| invalid(&content))
    }

    /// Write-to-temp-then-rename, so a crash never leaves a torn marker.
    fn write(&self, marker: Marker) -> CoreResult<()> {
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, marker.to_string()).map_err(|e| CoreError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| CoreError::io(&self.path, e))?;
        log::debug!("Version marker set to '{}'", marker);
        Ok(())
    }
}

/// In-process marker, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryVersionStore {
    marker: Cell<Marker>,
}

impl MemoryVersionStore {
    pub fn new(marker: Marker) -> Self {
        Self {
            marker: Cell::new(marker),
        }
    }

    pub fn get(&self) -> Marker {
        self.marker.get()
    }
}

impl VersionStore for MemoryVersionStore {
    fn read(&self) -> CoreResult<Marker> {
        Ok(self.marker.get())
    }

    fn write(&self, marker: Marker) -> CoreResult<()> {
        self.marker.set(marker);
        Ok(())
    }
}

impl<S: VersionStore + ?Sized> VersionStore for &S {
    fn read(&self) -> CoreResult<Marker> {
        (**self).read()
    }

    fn write(&self, marker: Marker) -> CoreResult<()> {
        (**self).write(marker)
    }
}
