//! Core types used throughout the project.

use std::borrow::Cow;

use serde_json::{
    Map,
    Value,
};

/// Substitution dictionary passed to `format` and `translate`.
///
/// Doubles as the carrier of the fallback text under [`DEFAULT_KEY`].
pub type Options = Map<String, Value>;

/// Reserved options key holding the fallback text. Never substituted.
pub const DEFAULT_KEY: &str = "default";

/// Builds [`Options`] from a JSON value.
///
/// Anything other than an object yields empty options, so `json!(null)` is a
/// valid way to say "no options".
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_translator::types::options;
///
/// let opts = options(json!({ "name": "Ada" }));
/// assert_eq!(opts.len(), 1);
/// ```
#[must_use]
pub fn options(value: Value) -> Options {
    match value {
        Value::Object(map) => map,
        _ => Options::new(),
    }
}

/// Renders a substitution value as it appears in formatted output.
///
/// Strings are used verbatim; every other value renders as its JSON text.
#[must_use]
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Returns the display text of a leaf if it can serve as a template.
///
/// Strings, numbers and booleans qualify. `null`, objects and arrays do not,
/// and neither does an empty string when `empty_as_missing` is set.
#[must_use]
pub fn displayable(value: &Value, empty_as_missing: bool) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) if empty_as_missing && s.is_empty() => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::string(json!("Ada"), "Ada")]
    #[case::number(json!(42), "42")]
    #[case::float(json!(1.5), "1.5")]
    #[case::boolean(json!(true), "true")]
    #[case::null(json!(null), "null")]
    #[case::object(json!({ "a": 1 }), r#"{"a":1}"#)]
    #[case::array(json!([1, 2]), "[1,2]")]
    fn test_stringify(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(stringify(&value), expected);
    }

    #[rstest]
    #[case::string(json!("Bye"), false, Some("Bye"))]
    #[case::empty_string_present(json!(""), false, Some(""))]
    #[case::empty_string_missing(json!(""), true, None)]
    #[case::zero(json!(0), true, Some("0"))]
    #[case::falsy_bool(json!(false), false, Some("false"))]
    #[case::null(json!(null), false, None)]
    #[case::object(json!({ "hello": "Hi" }), false, None)]
    #[case::array(json!(["a"]), false, None)]
    fn test_displayable(
        #[case] value: Value,
        #[case] empty_as_missing: bool,
        #[case] expected: Option<&str>,
    ) {
        let actual = displayable(&value, empty_as_missing);
        assert_eq!(actual.as_deref(), expected);
    }

    #[googletest::test]
    fn test_options_from_non_object_is_empty() {
        expect_that!(options(json!(null)).is_empty(), eq(true));
        expect_that!(options(json!("text")).is_empty(), eq(true));
        expect_that!(options(json!({ "a": 1, "b": 2 })).len(), eq(2));
    }
}
