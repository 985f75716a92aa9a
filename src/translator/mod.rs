//! Dotted-path translation lookup.
//!
//! A [`Translator`] pairs one locale with a [`Translations`] store and answers
//! three questions: what raw value sits at a path ([`Translator::fetch`]), what
//! a template reads like once its placeholders are filled ([`format`]), and
//! what should be displayed for a path ([`Translator::translate`]).

mod format;

use std::borrow::Cow;

use serde_json::Value;

pub use self::format::{
    format,
    placeholders,
};
use crate::config::{
    DEFAULT_LOCALE,
    TranslatorSettings,
};
use crate::key_path::{
    last_segment,
    split_key,
};
use crate::translations::Translations;
use crate::types::{
    DEFAULT_KEY,
    Options,
    displayable,
};

/// Looks up and interpolates translations for a single locale.
///
/// The locale is fixed at construction; build a new translator to switch.
/// Callers own the instance and pass it to whatever needs translating.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Locale whose tree is consulted.
    locale: String,
    /// Locale → tree store, filled in by the caller.
    translations: Translations,
    /// Fallback policy.
    settings: TranslatorSettings,
}

impl Translator {
    /// Creates a translator for `locale`, defaulting to `"en"`.
    ///
    /// `locale` is usually the host document's declared language. Only an
    /// absent locale is defaulted; `Some("")` is kept as given.
    ///
    /// # Examples
    /// ```
    /// use i18n_translator::Translator;
    ///
    /// assert_eq!(Translator::new(None).locale(), "en");
    /// assert_eq!(Translator::new(Some("ja")).locale(), "ja");
    /// ```
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        Self {
            locale: locale.unwrap_or(DEFAULT_LOCALE).to_string(),
            translations: Translations::new(),
            settings: TranslatorSettings::default(),
        }
    }

    /// Replaces the fallback policy, keeping locale and translations.
    #[must_use]
    pub fn with_settings(mut self, settings: TranslatorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces the translation store, keeping locale and settings.
    #[must_use]
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn settings(&self) -> &TranslatorSettings {
        &self.settings
    }

    #[must_use]
    pub const fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Mutable access for populating the store.
    ///
    /// Lookups cannot run while this borrow is alive.
    pub const fn translations_mut(&mut self) -> &mut Translations {
        &mut self.translations
    }

    /// Resolves the raw value stored at `path` for the current locale.
    ///
    /// Descends one object per scope segment; a missing level, or a level
    /// that is not an object, yields `None`. Never fails.
    #[must_use]
    pub fn fetch(&self, path: &str) -> Option<&Value> {
        let (scope_path, key) = split_key(path);

        let mut scope = self.translations.get(&self.locale);
        for part in scope_path {
            scope = scope.and_then(|s| s.get(part));
        }

        let value = scope.and_then(|s| s.get(key));
        if value.is_none() {
            tracing::trace!("No translation at '{}' for locale '{}'", path, self.locale);
        }
        value
    }

    /// Substitutes the placeholders of `template` from `dict`.
    ///
    /// Same as the free [`format`]; kept on the type for direct use.
    #[must_use]
    pub fn format(&self, template: &str, dict: &Options) -> String {
        format(template, dict)
    }

    /// Translates `path` with no options.
    #[must_use]
    pub fn translate(&self, path: &str) -> String {
        self.translate_with(path, &Options::new())
    }

    /// Translates `path`, interpolating `options`.
    ///
    /// The template comes from the first of these that is displayable:
    /// the value at `path`, `options["default"]`, the last path segment.
    /// Always produces a string.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use i18n_translator::{Translator, types::options};
    ///
    /// let mut translator = Translator::new(Some("en"));
    /// translator
    ///     .translations_mut()
    ///     .insert("en", json!({ "greeting": { "hello": "Hi %{name}!" } }));
    ///
    /// let opts = options(json!({ "name": "Ada" }));
    /// assert_eq!(translator.translate_with("greeting.hello", &opts), "Hi Ada!");
    /// assert_eq!(translator.translate("missing.key"), "key");
    /// ```
    #[must_use]
    pub fn translate_with(&self, path: &str, options: &Options) -> String {
        let template = self.resolve_template(path, options);
        format(&template, options)
    }

    /// Picks the template for `path` through the fallback chain.
    fn resolve_template<'a>(&'a self, path: &'a str, options: &'a Options) -> Cow<'a, str> {
        let empty_as_missing = self.settings.treat_empty_as_missing;

        if let Some(template) = self.fetch(path).and_then(|v| displayable(v, empty_as_missing)) {
            return template;
        }

        if let Some(fallback) =
            options.get(DEFAULT_KEY).and_then(|v| displayable(v, empty_as_missing))
        {
            tracing::debug!(
                "Translation '{}' missing for locale '{}', using default option",
                path,
                self.locale
            );
            return fallback;
        }

        let key = last_segment(path);
        tracing::debug!(
            "Translation '{}' missing for locale '{}', showing key '{}'",
            path,
            self.locale,
            key
        );
        Cow::Borrowed(key)
    }

    /// Lists every path [`fetch`](Self::fetch) can resolve for the current locale.
    #[must_use]
    pub fn available_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.translations.flatten(&self.locale).into_keys().collect();
        paths.sort_unstable();
        paths
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Translates `path` with `translator`, interpolating `options`.
///
/// Free-function form for callers that hold the translator by reference.
#[must_use]
pub fn translate(translator: &Translator, path: &str, options: &Options) -> String {
    translator.translate_with(path, options)
}

/// Short alias for [`translate`].
#[must_use]
pub fn t(translator: &Translator, path: &str, options: &Options) -> String {
    translate(translator, path, options)
}
