//! Diagnostic rendering of the resolved configuration.

use std::fmt::Write as _;

use crate::config::Config;
use crate::registry::CATALOG;

const RULE: &str = "-------------------------------------------------";

/// Render the record as a fixed-width table.
///
/// One row per registered option in catalog order, with a separator rule
/// between the four section groups. Booleans render as `true`/`false`,
/// integers as decimal, strings verbatim. Purely read-only; meant for
/// startup logging.
#[must_use]
pub fn render(config: &Config) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\t | {:<10} | {:<15} | {:<20}", "Section", "Key", "Value");
    let _ = writeln!(out, "\t {RULE}");

    let mut current_section = "";
    for d in CATALOG {
        if !current_section.is_empty() && d.section != current_section {
            let _ = writeln!(out, "\t {RULE}");
        }
        current_section = d.section;

        let _ = writeln!(
            out,
            "\t | {:<10} | {:<15} | {}",
            d.section,
            d.key,
            config.value(d.id)
        );
    }

    out
}
