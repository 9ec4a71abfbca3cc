//! Installed language discovery from `Strings_<code>.package` files

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::rules::StringRules;

/// Language codes installed under the client directory of `root`.
///
/// Lists the client directory without recursing. A missing or unreadable
/// directory yields no codes rather than an error. Codes come back sorted;
/// an empty code (`Strings_.package`) is ignored.
pub fn discover_languages(root: &Path, rules: &StringRules) -> Vec<String> {
    let client = root.join(&rules.client_dir);
    let entries = match fs::read_dir(&client) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %client.display(), error = %e, "client directory not listable");
            return Vec::new();
        }
    };

    let mut codes: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name();
            let code = rules.language_code(name.to_str()?)?;
            (!code.is_empty()).then(|| code.to_string())
        })
        .collect();

    codes.sort();
    codes
}
