//! Static option registry.
//!
//! Maps each recognized `(section, key)` pair to a stable [`OptionId`]
//! and a value kind. The catalog is a fixed table built at compile time
//! and never mutated, so no synchronization is needed. Lookup is a
//! linear scan; the table is small and only consulted during startup.

/// Value kind of a registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Strict `true` / `false`, matched case-insensitively.
    Bool,
    /// Base-10 unsigned 64-bit integer.
    Integer,
    /// Free-form text, stored verbatim.
    Text,
}

/// Stable identifier of a registered option.
///
/// Discriminants match the option's position in [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionId {
    /// `[node] name`
    NodeName,
    /// `[node] bind-url`
    NodeBindUrl,
    /// `[node] advertise-url`
    NodeAdvertiseUrl,
    /// `[node] source-addr`
    NodeSourceAddr,
    /// `[node] source-port`
    NodeSourcePort,
    /// `[node] log-level`
    NodeLogLevel,
    /// `[node] log-destination`
    NodeLogDestination,
    /// `[node] directory`
    NodeDirectory,
    /// `[node] in-memory`
    NodeInMemory,
    /// `[cluster] name`
    ClusterName,
    /// `[cluster] nodes`
    ClusterNodes,
    /// `[advanced] heartbeat`
    AdvancedHeartbeat,
    /// `[advanced] fsync`
    AdvancedFsync,
    /// `[cmd-line] config`
    CmdlineConfigFile,
    /// `[cmd-line] systemd`
    CmdlineSystemd,
}

/// Immutable metadata of one registered option.
#[derive(Debug, Clone, Copy)]
pub struct OptionDescriptor {
    /// Value kind controlling coercion and rendering.
    pub kind: OptionKind,
    /// Stable identifier.
    pub id: OptionId,
    /// Configuration file section the option lives in.
    pub section: &'static str,
    /// Key within the section.
    pub key: &'static str,
}

const fn item(
    kind: OptionKind,
    id: OptionId,
    section: &'static str,
    key: &'static str,
) -> OptionDescriptor {
    OptionDescriptor {
        kind,
        id,
        section,
        key,
    }
}

/// The option catalog, in registry order.
#[rustfmt::skip]
pub const CATALOG: &[OptionDescriptor] = &[
    item(OptionKind::Text,    OptionId::NodeName,           "node",     "name"),
    item(OptionKind::Text,    OptionId::NodeBindUrl,        "node",     "bind-url"),
    item(OptionKind::Text,    OptionId::NodeAdvertiseUrl,   "node",     "advertise-url"),
    item(OptionKind::Text,    OptionId::NodeSourceAddr,     "node",     "source-addr"),
    item(OptionKind::Text,    OptionId::NodeSourcePort,     "node",     "source-port"),
    item(OptionKind::Text,    OptionId::NodeLogLevel,       "node",     "log-level"),
    item(OptionKind::Text,    OptionId::NodeLogDestination, "node",     "log-destination"),
    item(OptionKind::Text,    OptionId::NodeDirectory,      "node",     "directory"),
    item(OptionKind::Bool,    OptionId::NodeInMemory,       "node",     "in-memory"),

    item(OptionKind::Text,    OptionId::ClusterName,        "cluster",  "name"),
    item(OptionKind::Text,    OptionId::ClusterNodes,       "cluster",  "nodes"),

    item(OptionKind::Integer, OptionId::AdvancedHeartbeat,  "advanced", "heartbeat"),
    item(OptionKind::Bool,    OptionId::AdvancedFsync,      "advanced", "fsync"),

    item(OptionKind::Text,    OptionId::CmdlineConfigFile,  "cmd-line", "config"),
    item(OptionKind::Bool,    OptionId::CmdlineSystemd,     "cmd-line", "systemd"),
];

/// Look up an option by `(section, key)`, case-insensitively on both parts.
///
/// # Example
///
/// ```
/// use resql_config::registry::{lookup, OptionId};
///
/// assert_eq!(lookup("Node", "In-Memory"), Some(OptionId::NodeInMemory));
/// assert_eq!(lookup("node", "bogus"), None);
/// ```
#[must_use]
pub fn lookup(section: &str, key: &str) -> Option<OptionId> {
    CATALOG
        .iter()
        .find(|d| d.section.eq_ignore_ascii_case(section) && d.key.eq_ignore_ascii_case(key))
        .map(|d| d.id)
}

/// The descriptor for a registered option.
#[must_use]
pub fn descriptor(id: OptionId) -> &'static OptionDescriptor {
    // OptionId discriminants mirror catalog positions, checked by test.
    &CATALOG[id as usize]
}
