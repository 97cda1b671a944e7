//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use card_core::config::CardConfig;
use card_core::product::Product;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Card configuration.
    pub config: CardConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, using `config_path` or searching upward from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => CardConfig::find(&cwd),
        };

        let config = match &config_path {
            Some(path) => {
                output.debug(&format!("Using config {}", path.display()));
                CardConfig::load(path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?
            }
            None => CardConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Read a product from a JSON or TOML file.
    pub fn load_product(&self, path: &str) -> Result<Product> {
        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read product file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML product: {}", path.display()))
        } else {
            Product::from_json(&content)
                .with_context(|| format!("Failed to parse JSON product: {}", path.display()))
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        cwd.join(candidate)
    }
}
