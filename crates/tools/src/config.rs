//! Persistent generator defaults for the `delve` tool.

use delve_core::Algorithm;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const APP_NAME: &str = "delve";
pub const CONFIG_FORMAT_VERSION: u32 = 1;
const CONFIG_FILE_NAME: &str = "generator.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub format_version: u32,
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub difficulty: u8,
    /// `None` lets the seed pick.
    #[serde(default)]
    pub algorithm: Option<Algorithm>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { format_version: CONFIG_FORMAT_VERSION, rows: 10, cols: 10, difficulty: 1, algorithm: None }
    }
}

impl GeneratorConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", APP_NAME)?;
        Some(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Replaces `path` in one rename, so readers never see a half-written file.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut staged, self).map_err(io::Error::other)?;
        staged.write_all(b"\n")?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|err| err.error)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if config.format_version != CONFIG_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported config format version {}", config.format_version),
            ));
        }
        Ok(config)
    }

    /// Missing files fall back to defaults; unreadable or malformed ones are still errors.
    pub fn load_or_default(path: &Path) -> io::Result<Self> {
        match Self::load(path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }
}
