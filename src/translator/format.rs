//! `%{name}` placeholder interpolation.

use crate::types::{
    DEFAULT_KEY,
    Options,
    stringify,
};

/// Opening token of a placeholder.
const PLACEHOLDER_OPEN: &str = "%{";
/// Closing token of a placeholder.
const PLACEHOLDER_CLOSE: char = '}';

/// Substitutes every `%{key}` in `template` with the matching entry of `dict`.
///
/// Replacement is literal and global. The reserved [`DEFAULT_KEY`] is never
/// substituted, and placeholders without a matching key are left verbatim.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_translator::translator::format;
/// use i18n_translator::types::options;
///
/// let dict = options(json!({ "a": "X", "b": "Y", "default": "Z" }));
/// assert_eq!(format("%{a}-%{b}", &dict), "X-Y");
/// ```
#[must_use]
pub fn format(template: &str, dict: &Options) -> String {
    dict.iter().filter(|(key, _)| key.as_str() != DEFAULT_KEY).fold(
        template.to_string(),
        |text, (key, value)| {
            let token = format!("{PLACEHOLDER_OPEN}{key}{PLACEHOLDER_CLOSE}");
            if text.contains(&token) { text.replace(&token, &stringify(value)) } else { text }
        },
    )
}

/// Lists the placeholder names in `template`, first occurrence first.
///
/// An unterminated `%{` ends the scan.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;

    while let Some((_, after_open)) = rest.split_once(PLACEHOLDER_OPEN) {
        let Some((name, after_close)) = after_open.split_once(PLACEHOLDER_CLOSE) else {
            break;
        };

        if !names.contains(&name) {
            names.push(name);
        }
        rest = after_close;
    }

    names
}
