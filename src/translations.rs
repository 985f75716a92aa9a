//! Locale-keyed translation trees.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::key_path::{
    KEY_SEPARATOR,
    is_addressable,
};

/// Errors raised while building a [`Translations`] store from raw JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationsError {
    /// The root value is not a locale → tree object.
    #[error("Translations root must be an object, found {found}")]
    RootNotObject {
        /// JSON type name of the offending value.
        found: &'static str,
    },
    /// A locale entry is not a nested object.
    #[error("Translations for locale '{locale}' must be an object, found {found}")]
    LocaleNotObject {
        /// Locale identifier of the offending entry.
        locale: String,
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// Translation trees keyed by locale identifier.
///
/// Each tree is an arbitrarily deep JSON object whose leaves are templates.
/// The store is populated by the caller; nothing here reads locale files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Translations {
    /// Locale → nested translation tree.
    locales: Map<String, Value>,
}

impl Translations {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a `{ locale: tree, ... }` JSON object.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use i18n_translator::translations::Translations;
    ///
    /// let translations = Translations::from_value(json!({
    ///     "en": { "farewell": "Bye" }
    /// }))
    /// .unwrap();
    /// assert!(translations.get("en").is_some());
    /// ```
    pub fn from_value(value: Value) -> Result<Self, TranslationsError> {
        let locales = match value {
            Value::Object(locales) => locales,
            other => return Err(TranslationsError::RootNotObject { found: type_name(&other) }),
        };

        if let Some((locale, tree)) = locales.iter().find(|(_, tree)| !tree.is_object()) {
            return Err(TranslationsError::LocaleNotObject {
                locale: locale.clone(),
                found: type_name(tree),
            });
        }

        Ok(Self { locales })
    }

    /// Adds or replaces the tree for `locale`, returning the previous tree.
    pub fn insert(&mut self, locale: impl Into<String>, tree: Value) -> Option<Value> {
        let locale = locale.into();
        tracing::debug!("Registering translations for locale '{}'", locale);
        self.locales.insert(locale, tree)
    }

    /// Returns the tree registered for `locale`.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&Value> {
        self.locales.get(locale)
    }

    /// Iterates over the registered locale identifiers.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Lists every leaf of `locale` that a lookup can reach, as a
    /// `path → display text` map.
    ///
    /// Returns an empty map for an unknown locale.
    #[must_use]
    pub fn flatten(&self, locale: &str) -> HashMap<String, String> {
        self.get(locale).map_or_else(HashMap::new, |tree| flatten_json(tree, None))
    }
}

/// JSON type name used in error messages.
const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Flatten nested JSON object into a dot-joined key map.
///
/// Only object members are descended. Members whose key contains the
/// separator are skipped along with their subtree, since no dotted path
/// can address them.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_translator::translations::flatten_json;
///
/// let json = json!({
///     "greeting": {
///         "hello": "Hi %{name}!"
///     },
///     "farewell": "Bye"
/// });
///
/// let flattened = flatten_json(&json, None);
/// assert_eq!(flattened.get("greeting.hello"), Some(&"Hi %{name}!".to_string()));
/// assert_eq!(flattened.get("farewell"), Some(&"Bye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(json: &Value, prefix: Option<&str>) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(json: &Value, prefix: Option<&str>, result: &mut HashMap<String, String>) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                if !is_addressable(key) {
                    tracing::trace!("Skipping unreachable translation key '{}'", key);
                    continue;
                }
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{KEY_SEPARATOR}{key}"));
                flatten_json_value(value, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_from_value_accepts_locale_objects() {
        let translations = Translations::from_value(json!({
            "en": { "farewell": "Bye" },
            "ja": {}
        }))
        .unwrap();

        expect_that!(translations.get("en"), some(eq(&json!({ "farewell": "Bye" }))));
        expect_that!(translations.get("ja"), some(eq(&json!({}))));
        expect_that!(translations.get("fr"), none());
        expect_that!(translations.locales().collect::<Vec<_>>(), eq(&vec!["en", "ja"]));
    }

    #[rstest]
    #[case::string(json!("en"), "string")]
    #[case::array(json!([]), "array")]
    #[case::null(json!(null), "null")]
    fn test_from_value_rejects_non_object_root(#[case] value: Value, #[case] found: &str) {
        let result = Translations::from_value(value);

        assert_that!(result, err(displays_as(contains_substring(found))));
    }

    #[rstest]
    fn test_from_value_rejects_non_object_locale() {
        let result = Translations::from_value(json!({
            "en": { "farewell": "Bye" },
            "ja": "さようなら"
        }));

        assert_that!(
            result,
            err(eq(&TranslationsError::LocaleNotObject {
                locale: "ja".to_string(),
                found: "string",
            }))
        );
    }

    #[googletest::test]
    fn test_insert_replaces_previous_tree() {
        let mut translations = Translations::new();
        expect_that!(translations.is_empty(), eq(true));

        let previous = translations.insert("en", json!({ "a": "1" }));
        expect_that!(previous, none());

        let previous = translations.insert("en", json!({ "a": "2" }));
        expect_that!(previous, some(eq(&json!({ "a": "1" }))));
        expect_that!(translations.get("en"), some(eq(&json!({ "a": "2" }))));
        expect_that!(translations.is_empty(), eq(false));
    }

    #[googletest::test]
    fn test_deserialize_transparent() {
        let translations: Translations =
            serde_json::from_str(r#"{"en": {"greeting": {"hello": "Hi"}}}"#).unwrap();

        expect_that!(translations.flatten("en"), len(eq(1)));
        expect_that!(
            serde_json::to_value(&translations).unwrap(),
            eq(&json!({ "en": { "greeting": { "hello": "Hi" } } }))
        );
    }

    #[googletest::test]
    fn test_flatten_unknown_locale_is_empty() {
        let translations = Translations::new();

        expect_that!(translations.flatten("en").is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_flatten_json_nested() {
        let json = json!({
            "common": {
                "hello": "Hello",
                "goodbye": "Goodbye"
            },
            "errors": {
                "notFound": "Not found"
            }
        });

        let result = flatten_json(&json, None);

        expect_that!(result.get("common.hello"), some(eq(&"Hello".to_string())));
        expect_that!(result.get("common.goodbye"), some(eq(&"Goodbye".to_string())));
        expect_that!(result.get("errors.notFound"), some(eq(&"Not found".to_string())));
        expect_that!(result.len(), eq(3));
    }

    #[googletest::test]
    fn test_flatten_json_skips_keys_containing_separator() {
        let json = json!({
            "a.b": "x",
            "a": { "b": "y" },
            "c.d": { "e": "z" }
        });

        let result = flatten_json(&json, None);

        expect_that!(result.get("a.b"), some(eq(&"y".to_string())));
        expect_that!(result.get("c.d.e"), none());
        expect_that!(result.len(), eq(1));
    }

    #[googletest::test]
    fn test_flatten_json_with_prefix() {
        let json = json!({ "hello": "Hello" });

        let result = flatten_json(&json, Some("common"));

        expect_that!(result.get("common.hello"), some(eq(&"Hello".to_string())));
    }

    #[googletest::test]
    fn test_flatten_json_non_string_leaves() {
        let json = json!({
            "number": 42,
            "boolean": true,
            "null": null,
            "items": ["apple", "banana"]
        });

        let result = flatten_json(&json, None);

        expect_that!(result.get("number"), some(eq(&"42".to_string())));
        expect_that!(result.get("boolean"), some(eq(&"true".to_string())));
        expect_that!(result.get("null"), some(eq(&"null".to_string())));
        // Arrays are leaves: lookups never index into them.
        expect_that!(result.get("items"), some(eq(&r#"["apple","banana"]"#.to_string())));
        expect_that!(result.get("items[0]"), none());
    }
}
