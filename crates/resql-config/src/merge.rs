//! Merge engine: validated writes into the configuration record.
//!
//! Both source adapters funnel every `(section, key, value)` triple
//! through [`Config::apply`], so type coercion and validation behave
//! identically whether a value came from the file or the command line.

use crate::config::Config;
use crate::error::ConfigError;
use crate::registry::{self, OptionId};

impl Config {
    /// Apply one `(section, key, value)` triple from any source.
    ///
    /// Looks the option up in the registry, coerces the value to the
    /// option's declared kind and writes it into the record in place.
    /// On failure the record is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownOption`] if `(section, key)` is not registered.
    /// - [`ConfigError::InvalidBoolean`] if a boolean option is given
    ///   anything but `true` or `false` (case-insensitive). No other
    ///   truthy or falsy spelling is accepted.
    /// - [`ConfigError::InvalidInteger`] if an integer option is empty,
    ///   has trailing garbage, or is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use resql_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply("advanced", "heartbeat", "1000")?;
    /// assert_eq!(config.advanced.heartbeat, 1000);
    /// # Ok::<(), resql_config::ConfigError>(())
    /// ```
    pub fn apply(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        let Some(id) = registry::lookup(section, key) else {
            return Err(ConfigError::unknown_option(section, key, value));
        };

        match id {
            OptionId::NodeName => self.node.name = value.to_string(),
            OptionId::NodeBindUrl => self.node.bind_url = value.to_string(),
            OptionId::NodeAdvertiseUrl => self.node.advertise_url = value.to_string(),
            OptionId::NodeSourceAddr => self.node.source_addr = value.to_string(),
            OptionId::NodeSourcePort => self.node.source_port = value.to_string(),
            OptionId::NodeLogLevel => self.node.log_level = value.to_string(),
            OptionId::NodeLogDestination => self.node.log_destination = value.to_string(),
            OptionId::NodeDirectory => self.node.directory = value.to_string(),
            OptionId::NodeInMemory => self.node.in_memory = parse_bool(section, key, value)?,
            OptionId::ClusterName => self.cluster.name = value.to_string(),
            OptionId::ClusterNodes => self.cluster.nodes = value.to_string(),
            OptionId::AdvancedHeartbeat => {
                self.advanced.heartbeat = parse_integer(section, key, value)?;
            }
            OptionId::AdvancedFsync => self.advanced.fsync = parse_bool(section, key, value)?,
            OptionId::CmdlineConfigFile => self.cmdline.config_file = value.to_string(),
            OptionId::CmdlineSystemd => self.cmdline.systemd = parse_bool(section, key, value)?,
        }

        Ok(())
    }
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::invalid_boolean(section, key, value))
    }
}

// Negative durations are rejected rather than wrapped into huge unsigned
// values; see DESIGN.md.
fn parse_integer(section: &str, key: &str, value: &str) -> Result<u64, ConfigError> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| ConfigError::invalid_integer(section, key, value))?;
    u64::try_from(parsed).map_err(|_| ConfigError::invalid_integer(section, key, value))
}
