//! Minimal INI tokenizer for the config file format.
//!
//! Delivers each parsed `(line, section, key, value)` triple to a
//! callback in file order. The format is deliberately small: `[section]`
//! headers, `key = value` lines, blank lines, and `#`/`;` comment lines.
//! Section and key matching against the registry is case-insensitive,
//! but that is the merge engine's concern; the scanner hands text
//! through verbatim (trimmed of surrounding whitespace).

use crate::error::ConfigError;

/// Scan `input`, invoking `on_item(line, section, key, value)` for every
/// key/value line. Stops at the first scanner or callback error,
/// reporting the 1-based line number it occurred on.
pub(crate) fn parse<F>(input: &str, mut on_item: F) -> Result<(), (usize, ConfigError)>
where
    F: FnMut(usize, &str, &str, &str) -> Result<(), ConfigError>,
{
    let mut section = "";

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let Some(name) = rest.strip_suffix(']') else {
                return Err((
                    line_no,
                    ConfigError::Syntax("unterminated section header".to_string()),
                ));
            };
            section = name.trim();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err((
                line_no,
                ConfigError::Syntax(format!("expected 'key = value', got '{line}'")),
            ));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err((line_no, ConfigError::Syntax("empty key".to_string())));
        }

        on_item(line_no, section, key, value.trim()).map_err(|e| (line_no, e))?;
    }

    Ok(())
}
