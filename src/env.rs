//! Capabilities the spelling pipeline reads from its host.
//!
//! Symbol names, character descriptions, translated messages and live speech
//! settings all belong to the host screen reader. They are passed in through
//! [`SpellingEnv`] so spelling stays a pure function of its inputs.

/// Announcement for a symbol found in a symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolName {
    pub text: String,
    /// The text already says the character was normalized.
    pub marks_normalized: bool,
}

impl SymbolName {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks_normalized: false,
        }
    }
}

pub trait SymbolResolver {
    /// Spoken name for `unit` in `locale`, if the table has one.
    fn symbol_name(&self, locale: &str, unit: &str) -> Option<SymbolName>;
}

pub trait CharacterDescriber {
    /// Phonetic descriptions for `unit` (e.g. "Alfa" for "a"), most common first.
    fn describe(&self, locale: &str, unit: &str) -> Option<Vec<String>>;
}

/// Active translation catalog. May be swapped by the host between calls.
pub trait MessageCatalog {
    fn gettext(&self, key: &str) -> Option<String>;
}

/// Speech settings the user can flip while the screen reader runs.
pub trait LiveSettings {
    fn auto_language_switching(&self) -> bool;
    fn auto_dialect_switching(&self) -> bool;
}

/// Translate `key`, falling back to the untranslated key.
pub fn translate(catalog: &dyn MessageCatalog, key: &str) -> String {
    catalog.gettext(key).unwrap_or_else(|| key.to_string())
}

/// Everything spelling needs from the host, borrowed for one call.
#[derive(Clone, Copy)]
pub struct SpellingEnv<'a> {
    pub symbols: &'a dyn SymbolResolver,
    pub descriptions: &'a dyn CharacterDescriber,
    pub catalog: &'a dyn MessageCatalog,
    pub settings: &'a dyn LiveSettings,
    /// Locale of the current voice.
    pub default_locale: &'a str,
}

impl<'a> SpellingEnv<'a> {
    /// Locale to spell in, given the locale the text was tagged with.
    ///
    /// Untagged text uses the voice locale. A tag that only differs from the
    /// voice locale by dialect is ignored unless dialect switching is on.
    pub fn resolve_locale(&self, requested: Option<&str>) -> String {
        match requested {
            Some(locale) if !locale.is_empty() => {
                if !self.settings.auto_dialect_switching()
                    && language_of(locale) == language_of(self.default_locale)
                {
                    self.default_locale.to_string()
                } else {
                    locale.to_string()
                }
            }
            _ => self.default_locale.to_string(),
        }
    }
}

/// Language subtag of a locale such as `fr_FR` or `pt-BR`.
pub fn language_of(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{Catalog, DescriptionTable, StaticSettings, SymbolTable};

    #[test]
    fn language_subtag() {
        assert_eq!(language_of("fr_FR"), "fr");
        assert_eq!(language_of("pt-BR"), "pt");
        assert_eq!(language_of("en"), "en");
    }

    #[test]
    fn dialects_collapse_without_dialect_switching() {
        let symbols = SymbolTable::new();
        let descriptions = DescriptionTable::new();
        let catalog = Catalog::default();
        let settings = StaticSettings::default();
        let dialects = StaticSettings {
            auto_dialect_switching: true,
            ..StaticSettings::default()
        };
        let env = SpellingEnv {
            symbols: &symbols,
            descriptions: &descriptions,
            catalog: &catalog,
            settings: &settings,
            default_locale: "en_US",
        };
        assert_eq!(env.resolve_locale(None), "en_US");
        assert_eq!(env.resolve_locale(Some("")), "en_US");
        assert_eq!(env.resolve_locale(Some("en_GB")), "en_US");
        assert_eq!(env.resolve_locale(Some("fr_FR")), "fr_FR");

        let env = SpellingEnv {
            settings: &dialects,
            ..env
        };
        assert_eq!(env.resolve_locale(Some("en_GB")), "en_GB");
    }

    #[test]
    fn translate_falls_back_to_key() {
        let mut catalog = Catalog::default();
        assert_eq!(translate(&catalog, "blank"), "blank");
        catalog.insert("blank", "vide");
        assert_eq!(translate(&catalog, "blank"), "vide");
    }
}
