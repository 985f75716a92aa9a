//! i18n-translator
//!
//! Looks up translated strings by dotted path in a locale-keyed tree and
//! interpolates `%{name}` placeholders.
//!
//! ```
//! use serde_json::json;
//! use i18n_translator::{Translations, Translator, t, types::options};
//!
//! let translations = Translations::from_value(json!({
//!     "en": { "greeting": { "hello": "Hi %{name}!" }, "farewell": "Bye" }
//! }))
//! .unwrap();
//! let translator = Translator::new(Some("en")).with_translations(translations);
//!
//! assert_eq!(t(&translator, "greeting.hello", &options(json!({ "name": "Ada" }))), "Hi Ada!");
//! assert_eq!(translator.translate("farewell"), "Bye");
//! assert_eq!(translator.translate("missing.key"), "key");
//! ```

pub mod config;
pub mod key_path;
mod test_utils;
pub mod translations;
pub mod translator;
pub mod types;

pub use translations::Translations;
pub use translator::{
    Translator,
    format,
    t,
    translate,
};
