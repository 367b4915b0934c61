//! Layered configuration resolution for the resql server.
//!
//! This crate resolves the effective runtime configuration of a node
//! from three layered sources (built-in defaults, an INI-style config
//! file, and command-line overrides) into one validated, strongly-typed
//! [`Config`] record. It runs once at process startup and fails fast
//! with a precise diagnostic if any source supplies an invalid value.
//!
//! # Overview
//!
//! - [`registry`] - the static catalog of recognized options
//! - [`Config`] - the typed record with documented defaults
//! - [`Config::apply`] - the merge engine every source funnels through
//! - [`Args`] - the command-line surface
//! - [`ConfigLoader`] - the layered driver (defaults, file, command line)
//! - [`render`] - the startup diagnostic table
//!
//! # Precedence
//!
//! Later sources override earlier ones for the same option: command-line
//! values always win over file values, which always win over built-in
//! defaults.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use resql_config::{Args, ConfigLoader};
//!
//! # fn main() -> Result<(), resql_config::ConfigError> {
//! let args = Args::parse();
//! let config = ConfigLoader::resolve(&args, true)?;
//! tracing::info!("{}", resql_config::render(&config));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! INI-style sections and keys, matched case-insensitively against the
//! registry. The default path is `./resql.ini`, overridable with
//! `-c=<file>` / `--config=<file>`.
//!
//! ```ini
//! [node]
//! name = node0
//! bind-url = tcp://127.0.0.1:7600
//! in-memory = true
//!
//! [cluster]
//! name = cluster
//! nodes = tcp://node0@127.0.0.1:7600
//!
//! [advanced]
//! heartbeat = 4000
//! fsync = true
//! ```
//!
//! Boolean options accept exactly `true` or `false` (any case); integer
//! options are base-10 unsigned 64-bit values. Anything else is rejected
//! with an error naming the section, key and offending value.

pub mod args;
pub mod config;
pub mod error;
mod ini;
pub mod loader;
mod merge;
pub mod registry;
pub mod render;

pub use args::Args;
pub use config::{
    AdvancedConfig, ClusterConfig, CmdlineConfig, Config, NodeConfig, Value, DEFAULT_CONFIG_FILE,
};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use registry::{OptionDescriptor, OptionId, OptionKind, CATALOG};
pub use render::render;
