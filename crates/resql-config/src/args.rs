//! Command-line source adapter.
//!
//! Every registered configuration option is addressable on the command
//! line as `--<section>-<key>=<value>` with a single-letter short form.
//! Values are collected here as plain strings and funneled through the
//! merge engine, so coercion and validation are uniform across sources
//! and the command line wins ties simply by being applied last.

use clap::{ArgAction, Parser};

use crate::error::ConfigError;

const AFTER_HELP: &str = "\
Any config file option can also be passed on the command line.

  e.g. in resql.ini:

    [node]
    directory = /tmp/data

  on the command line:

    resql --node-directory=/tmp/data

If the same option is set both in the config file and on the command
line, the command line takes precedence.";

/// Command-line arguments of the resql node.
#[derive(Parser, Debug)]
#[command(name = "resql", version, disable_version_flag = true, after_help = AFTER_HELP)]
#[command(about = "In-memory SQL database server, replicated with Raft")]
pub struct Args {
    /// Config file path, default is './resql.ini'.
    #[arg(short = 'c', long = "config", value_name = "FILE", require_equals = true)]
    pub config: Option<String>,

    /// Run as a systemd daemon.
    #[arg(short = 's', long = "systemd", action = ArgAction::SetTrue)]
    pub systemd: bool,

    /// Print version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Node name.
    #[arg(short = 'n', long = "node-name", value_name = "NAME", require_equals = true)]
    pub node_name: Option<String>,

    /// URL the node listens on.
    #[arg(short = 'b', long = "node-bind-url", value_name = "URL", require_equals = true)]
    pub node_bind_url: Option<String>,

    /// URL advertised to other nodes.
    #[arg(short = 'a', long = "node-advertise-url", value_name = "URL", require_equals = true)]
    pub node_advertise_url: Option<String>,

    /// Source address for outgoing connections.
    #[arg(short = 'r', long = "node-source-addr", value_name = "ADDR", require_equals = true)]
    pub node_source_addr: Option<String>,

    /// Source port for outgoing connections.
    #[arg(short = 'p', long = "node-source-port", value_name = "PORT", require_equals = true)]
    pub node_source_port: Option<String>,

    /// Log level: DEBUG, INFO, WARN or ERROR.
    #[arg(short = 'l', long = "node-log-level", value_name = "LEVEL", require_equals = true)]
    pub node_log_level: Option<String>,

    /// Log destination: stdout, stderr or a file path.
    #[arg(short = 't', long = "node-log-destination", value_name = "DEST", require_equals = true)]
    pub node_log_destination: Option<String>,

    /// Data directory.
    #[arg(short = 'd', long = "node-directory", value_name = "DIR", require_equals = true)]
    pub node_directory: Option<String>,

    /// Keep the store in memory: 'true' or 'false'.
    #[arg(short = 'i', long = "node-in-memory", value_name = "BOOL", require_equals = true)]
    pub node_in_memory: Option<String>,

    /// Cluster name.
    #[arg(short = 'u', long = "cluster-name", value_name = "NAME", require_equals = true)]
    pub cluster_name: Option<String>,

    /// Cluster node list, e.g. 'tcp://node0@127.0.0.1:7600'.
    #[arg(short = 'o', long = "cluster-nodes", value_name = "URLS", require_equals = true)]
    pub cluster_nodes: Option<String>,

    /// Heartbeat interval in milliseconds.
    #[arg(short = 'k', long = "advanced-heartbeat", value_name = "MS", require_equals = true)]
    pub advanced_heartbeat: Option<String>,

    /// Call fsync before acknowledging writes: 'true' or 'false'.
    #[arg(short = 'f', long = "advanced-fsync", value_name = "BOOL", require_equals = true)]
    pub advanced_fsync: Option<String>,
}

impl Args {
    /// Explicit config-file path, if one was given.
    ///
    /// Checked before any file I/O happens, so an empty `-c=` is caught
    /// as a usage error rather than a failed open.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfigPath`] for an empty path.
    pub fn config_path(&self) -> Result<Option<&str>, ConfigError> {
        match self.config.as_deref() {
            Some("") => Err(ConfigError::InvalidConfigPath),
            other => Ok(other),
        }
    }

    /// Recognized overrides as `(section, key, value)` triples.
    ///
    /// Applied by the loader strictly after the config file, in the
    /// registry's section/key order. The `-s` flag surfaces here as
    /// `("cmd-line", "systemd", "true")` so it takes the same merge path
    /// as every other option.
    #[must_use]
    pub fn overrides(&self) -> Vec<(&'static str, &'static str, &str)> {
        let fields: [(&'static str, &'static str, Option<&str>); 13] = [
            ("node", "name", self.node_name.as_deref()),
            ("node", "bind-url", self.node_bind_url.as_deref()),
            ("node", "advertise-url", self.node_advertise_url.as_deref()),
            ("node", "source-addr", self.node_source_addr.as_deref()),
            ("node", "source-port", self.node_source_port.as_deref()),
            ("node", "log-level", self.node_log_level.as_deref()),
            ("node", "log-destination", self.node_log_destination.as_deref()),
            ("node", "directory", self.node_directory.as_deref()),
            ("node", "in-memory", self.node_in_memory.as_deref()),
            ("cluster", "name", self.cluster_name.as_deref()),
            ("cluster", "nodes", self.cluster_nodes.as_deref()),
            ("advanced", "heartbeat", self.advanced_heartbeat.as_deref()),
            ("advanced", "fsync", self.advanced_fsync.as_deref()),
        ];

        let mut out: Vec<(&'static str, &'static str, &str)> = fields
            .into_iter()
            .filter_map(|(section, key, value)| value.map(|v| (section, key, v)))
            .collect();

        if self.systemd {
            out.push(("cmd-line", "systemd", "true"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_arguments() {
        let args = parse(&["resql"]);
        assert_eq!(args.config, None);
        assert!(!args.systemd);
        assert!(args.overrides().is_empty());
    }

    #[test]
    fn test_short_and_long_forms() {
        let short = parse(&["resql", "-n=node1", "-k=2000", "-f=false"]);
        let long = parse(&[
            "resql",
            "--node-name=node1",
            "--advanced-heartbeat=2000",
            "--advanced-fsync=false",
        ]);
        assert_eq!(short.node_name.as_deref(), Some("node1"));
        assert_eq!(short.overrides(), long.overrides());
    }

    #[test]
    fn test_every_option_flag() {
        let args = parse(&[
            "resql",
            "-n=n1",
            "-b=tcp://0.0.0.0:1",
            "-a=tcp://1.2.3.4:1",
            "-r=1.2.3.4",
            "-p=9000",
            "-l=DEBUG",
            "-t=stderr",
            "-d=/tmp/data",
            "-i=false",
            "-u=prod",
            "-o=tcp://n1@h:1",
            "-k=750",
            "-f=true",
            "-s",
        ]);

        let overrides = args.overrides();
        assert_eq!(overrides.len(), 14);
        assert!(overrides.contains(&("node", "log-destination", "stderr")));
        assert!(overrides.contains(&("advanced", "heartbeat", "750")));
        assert_eq!(*overrides.last().unwrap(), ("cmd-line", "systemd", "true"));
    }

    #[test]
    fn test_config_path() {
        let args = parse(&["resql", "-c=custom.ini"]);
        assert_eq!(args.config_path().unwrap(), Some("custom.ini"));

        let args = parse(&["resql"]);
        assert_eq!(args.config_path().unwrap(), None);
    }

    #[test]
    fn test_empty_config_path_is_usage_error() {
        let args = parse(&["resql", "-c="]);
        assert!(matches!(
            args.config_path(),
            Err(ConfigError::InvalidConfigPath)
        ));

        let args = parse(&["resql", "--config="]);
        assert!(matches!(
            args.config_path(),
            Err(ConfigError::InvalidConfigPath)
        ));
    }

    #[test]
    fn test_values_require_equals() {
        assert!(Args::try_parse_from(["resql", "-c", "custom.ini"]).is_err());
        assert!(Args::try_parse_from(["resql", "--node-name", "n1"]).is_err());
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(Args::try_parse_from(["resql", "--bogus=1"]).is_err());
        assert!(Args::try_parse_from(["resql", "-z"]).is_err());
    }

    #[test]
    fn test_bool_flags_pass_through_unvalidated() {
        // Validation happens in the merge engine, not in clap.
        let args = parse(&["resql", "-i=yes"]);
        assert_eq!(args.node_in_memory.as_deref(), Some("yes"));
    }
}
