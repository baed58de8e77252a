use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelcrit");
        Ok(Self { config_dir })
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: base.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Persisted token + member record live here between runs.
    pub fn session_file(&self) -> PathBuf {
        self.config_dir.join("session.toml")
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_base(".reelcrit"))
    }
}
