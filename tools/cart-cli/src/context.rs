//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cart_core::{catalog::Catalog, store::CartStore};
use cart_observability::{DispatchLogger, StructuredLogger};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Logger built from the `[logging]` section.
    pub logger: StructuredLogger,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    /// Load context relative to a working directory.
    pub fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let logger = StructuredLogger::new(format!("cart-{}", std::process::id()))
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            output,
            cwd: cwd.to_path_buf(),
            config_path,
            logger,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the built-in one.
    ///
    /// Relative catalog paths are resolved against the config file's
    /// directory.
    pub fn catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.config.catalog.path else {
            self.logger.info("using built-in catalog");
            return Ok(Catalog::reference());
        };

        let path = self.resolve_catalog_path(path);
        let catalog = Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

        self.logger
            .info_builder("catalog loaded")
            .field("source", path.display().to_string())
            .field_u64("items", catalog.len() as u64)
            .emit();
        if catalog.is_empty() {
            self.logger.warn("catalog is empty, nothing can be added");
        }

        Ok(catalog)
    }

    fn resolve_catalog_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }

        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// A fresh store with dispatch logging attached.
    pub fn store(&self) -> CartStore {
        let mut store = CartStore::new();
        store.subscribe(DispatchLogger::new(self.logger.clone()));
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_observability::{LogLevel, LogSink};

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();

        assert!(ctx.config_path.is_none());
        assert_eq!(ctx.catalog().unwrap().len(), 20);
    }

    #[test]
    fn test_finds_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(
            dir.path().join("cart.toml"),
            "[catalog]\npath = \"shop.json\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("shop.json"),
            r#"[{"id": 1, "name": "Kettle", "price": "30"}]"#,
        )
        .unwrap();

        let ctx = Context::load_from(&nested, None, Output::new(false, true)).unwrap();
        assert_eq!(ctx.config_path, Some(dir.path().join("cart.toml")));

        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].name, "Kettle");
    }

    #[test]
    fn test_missing_catalog_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("cart.toml");
        std::fs::write(&config, "[catalog]\npath = \"nope.toml\"\n").unwrap();

        let ctx = Context::load_from(
            dir.path(),
            Some(config.to_str().unwrap()),
            Output::new(false, true),
        )
        .unwrap();
        assert!(ctx.catalog().is_err());
    }

    #[test]
    fn test_catalog_load_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.toml"), "[catalog]\npath = \"shop.json\"\n").unwrap();
        std::fs::write(dir.path().join("shop.json"), "[]").unwrap();

        let (sink, buffer) = LogSink::memory();
        let mut ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();
        ctx.logger = ctx
            .logger
            .clone()
            .with_sink(sink)
            .with_min_level(LogLevel::Info)
            .without_timing();

        assert!(ctx.catalog().unwrap().is_empty());

        let logged = buffer.borrow();
        assert_eq!(logged.len(), 2);
        assert!(logged[0].starts_with("[INFO] catalog loaded | items=0 source="));
        assert!(logged[0].ends_with("shop.json\""));
        assert_eq!(logged[1], "[WARN] catalog is empty, nothing can be added");
    }

    #[test]
    fn test_built_in_catalog_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, buffer) = LogSink::memory();
        let mut ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();
        ctx.logger = ctx
            .logger
            .clone()
            .with_sink(sink)
            .with_min_level(LogLevel::Info)
            .without_timing();

        ctx.catalog().unwrap();
        assert_eq!(*buffer.borrow(), vec!["[INFO] using built-in catalog".to_string()]);
    }

    #[test]
    fn test_logger_follows_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.toml"), "[logging]\nlevel = \"debug\"\n").unwrap();

        let ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();
        assert!(ctx.logger.enabled(LogLevel::Debug));
        assert!(!ctx.logger.enabled(LogLevel::Trace));
    }
}
