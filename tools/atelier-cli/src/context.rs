//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use atelier_cache::Cache;

use crate::config::{AtelierConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: AtelierConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Local store directory.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    ///
    /// `data_dir` from the command line wins over the config file.
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (AtelierConfig::load(path)?, Some(path.to_path_buf()))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (AtelierConfig::default(), None),
            }
        };

        let data_dir = data_dir
            .or_else(|| config.store.data_dir.clone())
            .map(|dir| resolve_path(&cwd, &dir))
            .unwrap_or_else(default_data_dir);

        tracing::debug!(data_dir = %data_dir.display(), "context loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_dir,
        })
    }

    /// Open the local store.
    pub fn cache(&self) -> Result<Cache> {
        Cache::open(&self.data_dir)
            .with_context(|| format!("Failed to open store at {}", self.data_dir.display()))
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Result<Option<(AtelierConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                let config = AtelierConfig::load(&config_path)?;
                return Ok(Some((config, config_path)));
            }
        }

        if !current.pop() {
            return Ok(None);
        }
    }
}

/// Resolve a path relative to the working directory, expanding `~`.
fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the platform-specific data directory.
fn default_data_dir() -> PathBuf {
    let base = if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    };
    base.join("atelier")
}
