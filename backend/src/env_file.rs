//! Optional `.env`-style file source for the configuration loader.
//!
//! Entries are merged into an already-populated variable map with the map
//! (i.e. the OS environment) taking precedence: a file entry only fills a
//! key that is not set yet. `${NAME}` references inside values expand in
//! a single left-to-right pass against the merged map, so a reference can
//! see OS variables and earlier entries of the same file. Unresolved
//! references are kept literally.

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Merge the entries of `path` into `vars`.
///
/// A missing file is not an error; any other read failure is returned to
/// the caller.
pub fn apply(path: &Path, vars: &mut HashMap<String, String>) -> io::Result<()> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };
    merge_str(&contents, vars);
    Ok(())
}

/// Merge `key=value` lines into `vars`. Blank lines and `#` comments are
/// skipped, an `export ` prefix is tolerated, and surrounding quotes are
/// stripped (single-quoted values stay literal).
pub fn merge_str(contents: &str, vars: &mut HashMap<String, String>) {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim();
        // Quotes are only stripped when they enclose the whole value;
        // mismatched quotes stay in place literally.
        let value = if let Some(literal) = unquote(value, '\'') {
            literal.to_string()
        } else if let Some(inner) = unquote(value, '"') {
            expand(inner, vars)
        } else {
            expand(value, vars)
        };

        // First occurrence wins; already-set (OS) values are never overridden.
        vars.entry(key.to_string()).or_insert(value);
    }
}

fn unquote(value: &str, quote: char) -> Option<&str> {
    value.strip_prefix(quote)?.strip_suffix(quote)
}

/// Expand `${NAME}` references in one left-to-right pass. References to
/// unknown names (and a dangling `${` with no closing brace) are copied
/// through unchanged.
fn expand(value: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match vars.get(name) {
                    Some(resolved) => out.push_str(resolved),
                    None => out.push_str(&rest[start..start + end + 3]),
                }
                rest = &rest[start + end + 3..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
