use std::path::{Path, PathBuf};

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Default directory holding the front-end assets.
const DEFAULT_STATIC_DIR: &str = "./static";

/// Settings for the routes outside the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Directory served at `/static`; its `index.html` is served at `/`.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)
    )]
    pub static_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration serving assets from `static_dir`.
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    /// Returns the static asset directory.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Returns the path of the page served at `/`.
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    /// Returns true if the page served at `/` exists on disk.
    pub fn has_index_file(&self) -> bool {
        self.index_file().is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_static_dir() {
        let config = ServiceConfig::default();
        assert_eq!(config.static_dir(), Path::new("./static"));
        assert_eq!(config.index_file(), Path::new("./static/index.html"));
    }

    #[test]
    fn detects_missing_index() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = ServiceConfig::new(dir.path());
        assert!(!config.has_index_file());

        std::fs::write(config.index_file(), "<html></html>")?;
        assert!(config.has_index_file());

        Ok(())
    }
}
