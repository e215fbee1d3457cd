//! JSON file backend.
//!
//! The catalog is stored as a UTF-8 JSON array of record objects. A
//! missing file is an empty catalog; a file that exists but does not
//! parse is a storage error.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{CatalogError, Result};
use crate::record::Record;
use crate::storage::CatalogBackend;

/// Backend persisting the catalog to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let name = format!(".bookshelf_{}_{}.tmp", std::process::id(), nanos);
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
            _ => PathBuf::from(name),
        }
    }
}

impl CatalogBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Record>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&contents).map_err(|err| {
            CatalogError::Storage(format!(
                "catalog file {} is malformed: {}",
                self.path.display(),
                err
            ))
        })
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;

        // Write to a sibling temp file, then rename over the catalog so a
        // failed write never truncates the existing file.
        let temp = self.temp_path();
        let mut file = fs::File::create(&temp)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        drop(file);

        swap_into_place(&temp, &self.path)?;
        Ok(())
    }
}

/// Move the freshly written temp file over the catalog file.
///
/// Windows refuses to rename onto an existing path, so on failure the
/// old catalog is cleared and the rename retried once. If that also
/// fails the temp file is removed, leaving whatever catalog state the
/// first rename saw.
fn swap_into_place(temp: &Path, catalog: &Path) -> std::io::Result<()> {
    let first_err = match fs::rename(temp, catalog) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    let _ = fs::remove_file(catalog);
    fs::rename(temp, catalog).map_err(|retry_err| {
        let _ = fs::remove_file(temp);
        std::io::Error::new(
            retry_err.kind(),
            format!(
                "could not replace {}: {first_err}; retry failed: {retry_err}",
                catalog.display()
            ),
        )
    })
}
