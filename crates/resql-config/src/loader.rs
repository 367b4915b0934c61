//! Layered configuration resolution.
//!
//! The [`ConfigLoader`] applies sources in layers, later layers
//! overriding earlier ones for the same option:
//! 1. Built-in defaults
//! 2. The INI config file
//! 3. Command-line overrides
//!
//! The whole pipeline runs synchronously at process startup, before any
//! worker exists, and never terminates the process itself; the entry
//! point decides what a fatal error means.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::args::Args;
use crate::config::Config;
use crate::error::ConfigError;
use crate::ini;

/// Configuration loader with a layered approach.
///
/// # Example
///
/// ```no_run
/// use clap::Parser;
/// use resql_config::{Args, ConfigLoader};
///
/// # fn main() -> Result<(), resql_config::ConfigError> {
/// let args = Args::parse();
/// let config = ConfigLoader::resolve(&args, true)?;
/// println!("listening on {}", config.node.bind_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    config: Config,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new loader holding the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Reset to default configuration values.
    ///
    /// This is what `new()` starts from, but can be chained for clarity.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.config = Config::default();
        self
    }

    /// Load a config file, streaming every parsed triple through the
    /// merge engine in file order.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileMissing`] if the path does not exist.
    /// - [`ConfigError::ReadError`] if the file cannot be read.
    /// - [`ConfigError::FileParse`] if the file is malformed or contains
    ///   an invalid value; carries the failing line number and the
    ///   underlying scanner or merge error. The first failure aborts the
    ///   rest of the file.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileMissing {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        let config = &mut self.config;
        ini::parse(&content, |_, section, key, value| {
            config.apply(section, key, value)
        })
        .map_err(|(line, source)| ConfigError::FileParse {
            path: path.to_path_buf(),
            line,
            source: Box::new(source),
        })?;

        debug!("loaded config file {}", path.display());
        Ok(self)
    }

    /// Load a config file if it exists; a missing file is only a warning.
    ///
    /// This is the startup behavior for the default path: a node started
    /// without `resql.ini` in its working directory runs on defaults.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::with_file`], except that a missing file is
    /// tolerated.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            self.with_file(path)
        } else {
            warn!("There is no config file at {}", path.display());
            Ok(self)
        }
    }

    /// Apply command-line overrides through the merge engine.
    ///
    /// Must run after the file layer so the command line wins ties.
    ///
    /// # Errors
    ///
    /// Propagates the first merge failure, e.g.
    /// [`ConfigError::InvalidBoolean`] for `--advanced-fsync=maybe`.
    pub fn with_overrides(mut self, args: &Args) -> Result<Self, ConfigError> {
        for (section, key, value) in args.overrides() {
            self.config.apply(section, key, value)?;
        }
        Ok(self)
    }

    /// Finalize and return the resolved configuration.
    #[must_use]
    pub fn load(self) -> Config {
        self.config
    }

    /// Resolve the effective configuration exactly as node startup does.
    ///
    /// Order: defaults, then an explicit `-c`/`--config` path override,
    /// then the config file (when `read_file` is set; a missing file is
    /// a warning), then the remaining command-line overrides.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidConfigPath`] for an empty `-c=`, checked
    ///   before any file I/O.
    /// - Any [`ConfigLoader::with_file`] or
    ///   [`ConfigLoader::with_overrides`] failure.
    pub fn resolve(args: &Args, read_file: bool) -> Result<Config, ConfigError> {
        let mut loader = Self::new().with_defaults();

        if let Some(path) = args.config_path()? {
            loader.config.apply("cmd-line", "config", path)?;
        }

        if read_file {
            let path = PathBuf::from(&loader.config.cmdline.config_file);
            loader = loader.with_optional_file(path)?;
        }

        loader.with_overrides(args).map(Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    fn write_ini(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("resql.ini");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_only() {
        let config = ConfigLoader::new().with_defaults().load();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_values_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(
            dir.path(),
            "[node]\n\
             name = node7\n\
             in-memory = false\n\
             \n\
             [advanced]\n\
             heartbeat = 1500\n",
        );

        let config = ConfigLoader::new().with_file(&path).unwrap().load();
        assert_eq!(config.node.name, "node7");
        assert!(!config.node.in_memory);
        assert_eq!(config.advanced.heartbeat, 1500);
        // Untouched options keep their defaults.
        assert_eq!(config.cluster.name, "cluster");
    }

    #[test]
    fn test_later_file_line_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[node]\nname = first\nname = second\n");

        let config = ConfigLoader::new().with_file(&path).unwrap().load();
        assert_eq!(config.node.name, "second");
    }

    #[test]
    fn test_missing_file_is_fatal_for_with_file() {
        let err = ConfigLoader::new()
            .with_file("/nonexistent/resql.ini")
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileMissing { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_missing_file_is_tolerated_for_optional() {
        let config = ConfigLoader::new()
            .with_optional_file("/nonexistent/resql.ini")
            .unwrap()
            .load();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[node]\nname = ok\nbroken line\n");

        let err = ConfigLoader::new().with_file(&path).unwrap_err();
        match err {
            ConfigError::FileParse { line, source, .. } => {
                assert_eq!(line, 3);
                assert!(matches!(*source, ConfigError::Syntax(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_value_in_file_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[advanced]\nfsync = maybe\n");

        let err = ConfigLoader::new().with_file(&path).unwrap_err();
        match err {
            ConfigError::FileParse { line, source, .. } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, ConfigError::InvalidBoolean { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_in_file_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[node]\nbogus = x\n");

        let err = ConfigLoader::new().with_file(&path).unwrap_err();
        match err {
            ConfigError::FileParse { line, source, .. } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, ConfigError::UnknownOption { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[advanced]\nheartbeat = 1000\n");

        let argv = args(&[
            "resql",
            &format!("-c={}", path.display()),
            "--advanced-heartbeat=2000",
        ]);
        let config = ConfigLoader::resolve(&argv, true).unwrap();
        assert_eq!(config.advanced.heartbeat, 2000);
        assert_eq!(config.cmdline.config_file, path.display().to_string());
    }

    #[test]
    fn test_file_wins_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[advanced]\nheartbeat = 1000\n");

        let argv = args(&["resql", &format!("-c={}", path.display())]);
        let config = ConfigLoader::resolve(&argv, true).unwrap();
        assert_eq!(config.advanced.heartbeat, 1000);
    }

    #[test]
    fn test_empty_config_path_fails_before_io() {
        let argv = args(&["resql", "-c="]);
        let err = ConfigLoader::resolve(&argv, true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigPath));
    }

    #[test]
    fn test_read_file_disabled_skips_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ini(dir.path(), "[advanced]\nheartbeat = 1000\n");

        let argv = args(&["resql", &format!("-c={}", path.display())]);
        let config = ConfigLoader::resolve(&argv, false).unwrap();
        // Path is recorded but the file is never opened.
        assert_eq!(config.advanced.heartbeat, 4000);
        assert_eq!(config.cmdline.config_file, path.display().to_string());
    }

    #[test]
    fn test_invalid_override_is_fatal() {
        let argv = args(&["resql", "--advanced-fsync=maybe"]);
        let err = ConfigLoader::resolve(&argv, false).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_systemd_flag_applies_through_engine() {
        let argv = args(&["resql", "-s"]);
        let config = ConfigLoader::resolve(&argv, false).unwrap();
        assert!(config.cmdline.systemd);
    }
}
