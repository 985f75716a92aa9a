//! Translation key path utilities.

/// Separator between the segments of a translation path.
pub const KEY_SEPARATOR: char = '.';

/// Splits `path` into its scope segments and the final key.
///
/// A path without a separator has no scope segments. An empty path yields an
/// empty key, which never matches a real entry in practice.
///
/// # Examples
/// ```
/// use i18n_translator::key_path::split_key;
///
/// let (scope, key) = split_key("greeting.hello");
/// assert_eq!(scope.collect::<Vec<_>>(), vec!["greeting"]);
/// assert_eq!(key, "hello");
/// ```
#[must_use]
pub fn split_key(path: &str) -> (impl Iterator<Item = &str>, &str) {
    match path.rsplit_once(KEY_SEPARATOR) {
        Some((scope, key)) => (Some(scope.split(KEY_SEPARATOR)).into_iter().flatten(), key),
        None => (None.into_iter().flatten(), path),
    }
}

/// Returns the last segment of `path`, used as the display text of last resort.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit_once(KEY_SEPARATOR).map_or(path, |(_, key)| key)
}

/// Whether `segment` can appear as one step of a path.
///
/// Tree keys that contain the separator are unreachable by lookup.
#[must_use]
pub fn is_addressable(segment: &str) -> bool {
    !segment.contains(KEY_SEPARATOR)
}
