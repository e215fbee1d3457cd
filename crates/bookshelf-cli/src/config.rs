//! Catalog path resolution.
//!
//! Precedence: `--catalog` flag (or `BOOKSHELF_CATALOG` env, handled by
//! clap) > `[catalog] path` in the config file > `books.json` in the
//! current directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default catalog filename when nothing else is configured.
pub const DEFAULT_CATALOG_FILE: &str = "books.json";

#[derive(Debug, Default, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    pub path: Option<PathBuf>,
}

/// XDG-style config file location: `$XDG_CONFIG_HOME/bookshelf/config.toml`,
/// falling back to `$HOME/.config/bookshelf/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("bookshelf").join("config.toml"))
}

/// Load and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<BookshelfConfig> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("invalid config {}: {}", path.display(), err))
}

/// Resolve the catalog file path from flag, config file, or default.
///
/// A missing config file is fine; a config file that exists but does not
/// parse is an error.
pub fn resolve_catalog_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    if let Some(config_path) = default_config_path() {
        if config_path.exists() {
            let config = load(&config_path)?;
            if let Some(path) = config.catalog.path {
                return Ok(path);
            }
        }
    }

    Ok(PathBuf::from(DEFAULT_CATALOG_FILE))
}
