//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use swipe_commerce::catalog::{CatalogProvider, StaticCatalog};
use swipe_commerce::CategoryId;
use swipe_deck::CategorySelector;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Reject settings the swipe deck cannot work with.
    pub fn validate(&self) -> Result<()> {
        let errors = self.config.deck().errors();
        if errors.is_empty() {
            return Ok(());
        }
        let source = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        bail!("Invalid configuration ({}): {}", source, errors.join("; "))
    }

    /// Load the configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        match self.config.catalog.path {
            Some(ref path) => {
                let path = self.resolve_catalog_path(path);
                StaticCatalog::load(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(StaticCatalog::builtin()),
        }
    }

    /// Category to open: the explicit one, then the configured default,
    /// then the catalog's first category.
    pub fn initial_category(&self, catalog: &StaticCatalog, explicit: Option<&str>) -> CategoryId {
        explicit
            .or(self.config.catalog.default_category.as_deref())
            .map(CategoryId::new)
            .or_else(|| catalog.default_category().cloned())
            .unwrap_or_else(|| CategoryId::new(""))
    }

    /// Build a category selector over the configured catalog.
    pub fn selector(&self, explicit: Option<&str>) -> Result<CategorySelector<StaticCatalog>> {
        let catalog = self.catalog()?;
        let category = self.initial_category(&catalog, explicit);
        Ok(CategorySelector::starting_at(
            catalog,
            category,
            self.config.transition,
        ))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Catalog paths are relative to the config file's directory.
    fn resolve_catalog_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            return PathBuf::from(path);
        }
        match self.config_path.as_ref().and_then(|p| p.parent()) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(path),
            _ => self.resolve_path(path),
        }
    }
}

/// Find config file in directory tree.
///
/// The first file found is used; a file that fails to parse is an error
/// rather than a reason to keep searching.
fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let config = CliConfig::load(&config_path)?;
                return Ok(Some((config, config_path)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}
