//! Configuration record types.
//!
//! The [`Config`] struct is the typed, owned storage for every resolved
//! value, grouped into the four logical sections of the configuration
//! file. Every field holds its documented default immediately after
//! construction, so the record is usable even when no file or command
//! line overrides are applied.

use std::fmt;

use crate::registry::OptionId;

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "resql.ini";

/// Node section: identity, addresses, logging and storage location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Node name, unique within the cluster.
    pub name: String,
    /// URL the node listens on.
    pub bind_url: String,
    /// URL advertised to other nodes; differs from `bind_url` behind NAT.
    pub advertise_url: String,
    /// Source address for outgoing connections, empty for any.
    pub source_addr: String,
    /// Source port for outgoing connections, empty for any.
    pub source_port: String,
    /// Log level name (`DEBUG`, `INFO`, `WARN`, `ERROR`).
    pub log_level: String,
    /// Log destination: `stdout`, `stderr` or a file path.
    pub log_destination: String,
    /// Data directory.
    pub directory: String,
    /// Keep the store in memory instead of on disk.
    pub in_memory: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: default_node_name(),
            bind_url: default_url(),
            advertise_url: default_url(),
            source_addr: String::new(),
            source_port: String::new(),
            log_level: default_log_level(),
            log_destination: default_log_destination(),
            directory: default_directory(),
            in_memory: true,
        }
    }
}

fn default_node_name() -> String {
    "node0".to_string()
}

fn default_url() -> String {
    "tcp://127.0.0.1:7600".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_log_destination() -> String {
    "stdout".to_string()
}

fn default_directory() -> String {
    "./".to_string()
}

/// Cluster section: cluster identity and membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// Cluster name; all members must agree on it.
    pub name: String,
    /// Comma-separated member URLs, `tcp://<name>@<host>:<port>`.
    pub nodes: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: default_cluster_name(),
            nodes: default_cluster_nodes(),
        }
    }
}

fn default_cluster_name() -> String {
    "cluster".to_string()
}

fn default_cluster_nodes() -> String {
    "tcp://node0@127.0.0.1:7600".to_string()
}

/// Advanced section: tuning knobs with safe defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedConfig {
    /// Heartbeat interval in milliseconds.
    pub heartbeat: u64,
    /// Call fsync before acknowledging writes.
    pub fsync: bool,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            heartbeat: default_heartbeat(),
            fsync: true,
        }
    }
}

fn default_heartbeat() -> u64 {
    4000
}

/// Command-line section: options that only make sense per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdlineConfig {
    /// Config file path the file adapter reads.
    pub config_file: String,
    /// Run as a systemd daemon.
    pub systemd: bool,
}

impl Default for CmdlineConfig {
    fn default() -> Self {
        Self {
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            systemd: false,
        }
    }
}

/// The resolved configuration record.
///
/// Constructed once at process start with [`Config::default`], mutated in
/// place by the merge engine as sources are applied, then treated as
/// immutable for the rest of the process lifetime.
///
/// # Example
///
/// ```
/// use resql_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.node.name, "node0");
/// assert_eq!(config.advanced.heartbeat, 4000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Node section.
    pub node: NodeConfig,
    /// Cluster section.
    pub cluster: ClusterConfig,
    /// Advanced section.
    pub advanced: AdvancedConfig,
    /// Command-line section.
    pub cmdline: CmdlineConfig,
}

/// Type-aware view of one resolved option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Boolean option.
    Bool(bool),
    /// Integer option.
    Integer(u64),
    /// Text option.
    Text(&'a str),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Config {
    /// Current value of a registered option.
    ///
    /// Used by the diagnostic serializer for type-aware formatting.
    #[must_use]
    pub fn value(&self, id: OptionId) -> Value<'_> {
        match id {
            OptionId::NodeName => Value::Text(&self.node.name),
            OptionId::NodeBindUrl => Value::Text(&self.node.bind_url),
            OptionId::NodeAdvertiseUrl => Value::Text(&self.node.advertise_url),
            OptionId::NodeSourceAddr => Value::Text(&self.node.source_addr),
            OptionId::NodeSourcePort => Value::Text(&self.node.source_port),
            OptionId::NodeLogLevel => Value::Text(&self.node.log_level),
            OptionId::NodeLogDestination => Value::Text(&self.node.log_destination),
            OptionId::NodeDirectory => Value::Text(&self.node.directory),
            OptionId::NodeInMemory => Value::Bool(self.node.in_memory),
            OptionId::ClusterName => Value::Text(&self.cluster.name),
            OptionId::ClusterNodes => Value::Text(&self.cluster.nodes),
            OptionId::AdvancedHeartbeat => Value::Integer(self.advanced.heartbeat),
            OptionId::AdvancedFsync => Value::Bool(self.advanced.fsync),
            OptionId::CmdlineConfigFile => Value::Text(&self.cmdline.config_file),
            OptionId::CmdlineSystemd => Value::Bool(self.cmdline.systemd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CATALOG;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.node.name, "node0");
        assert_eq!(config.node.bind_url, "tcp://127.0.0.1:7600");
        assert_eq!(config.node.advertise_url, "tcp://127.0.0.1:7600");
        assert_eq!(config.node.source_addr, "");
        assert_eq!(config.node.source_port, "");
        assert_eq!(config.node.log_level, "INFO");
        assert_eq!(config.node.log_destination, "stdout");
        assert_eq!(config.node.directory, "./");
        assert!(config.node.in_memory);

        assert_eq!(config.cluster.name, "cluster");
        assert_eq!(config.cluster.nodes, "tcp://node0@127.0.0.1:7600");

        assert_eq!(config.advanced.heartbeat, 4000);
        assert!(config.advanced.fsync);

        assert_eq!(config.cmdline.config_file, "resql.ini");
        assert!(!config.cmdline.systemd);
    }

    #[test]
    fn test_value_covers_every_catalog_entry() {
        let config = Config::default();
        for d in CATALOG {
            // Must not panic, and the kind must line up with the descriptor.
            let value = config.value(d.id);
            match (d.kind, value) {
                (crate::registry::OptionKind::Bool, Value::Bool(_))
                | (crate::registry::OptionKind::Integer, Value::Integer(_))
                | (crate::registry::OptionKind::Text, Value::Text(_)) => {}
                (kind, value) => panic!("kind mismatch for {:?}: {kind:?} vs {value:?}", d.id),
            }
        }
    }

    #[test]
    fn test_value_display() {
        let config = Config::default();
        assert_eq!(config.value(OptionId::NodeInMemory).to_string(), "true");
        assert_eq!(config.value(OptionId::AdvancedHeartbeat).to_string(), "4000");
        assert_eq!(config.value(OptionId::NodeName).to_string(), "node0");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
