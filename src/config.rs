//! Translator settings.

/// Locale used when none is supplied.
pub const DEFAULT_LOCALE: &str = "en";

/// Fallback policy of a [`Translator`](crate::Translator), set in code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorSettings {
    /// Treat empty-string templates and defaults as missing.
    ///
    /// Off by default: an empty string stored as a translation is shown as-is.
    pub treat_empty_as_missing: bool,
}

impl TranslatorSettings {
    /// Settings that treat `""` like an absent translation.
    #[must_use]
    pub const fn empty_as_missing() -> Self {
        Self { treat_empty_as_missing: true }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn default_keeps_empty_strings() {
        assert_that!(TranslatorSettings::default().treat_empty_as_missing, eq(false));
    }

    #[rstest]
    fn empty_as_missing_sets_flag() {
        assert_that!(TranslatorSettings::empty_as_missing().treat_empty_as_missing, eq(true));
    }
}
