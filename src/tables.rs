//! In-memory symbol, description and message tables.
//!
//! These back the capabilities in [`crate::env`] for the command-line tool
//! and tests. A screen reader embedding the speller plugs in its own.

use std::collections::HashMap;

use crate::env::{
    language_of, CharacterDescriber, LiveSettings, MessageCatalog, SymbolName, SymbolResolver,
};

const ENGLISH_SYMBOLS: &[(&str, &str)] = &[
    (" ", "space"),
    ("\t", "tab"),
    ("\n", "line feed"),
    ("\r", "carriage return"),
    ("\u{00A0}", "no-break space"),
    ("!", "bang"),
    ("\"", "quote"),
    ("#", "number"),
    ("$", "dollar"),
    ("%", "percent"),
    ("&", "and"),
    ("'", "tick"),
    ("(", "left paren"),
    (")", "right paren"),
    ("*", "star"),
    ("+", "plus"),
    (",", "comma"),
    ("-", "dash"),
    (".", "dot"),
    ("/", "slash"),
    (":", "colon"),
    (";", "semi"),
    ("<", "less"),
    ("=", "equals"),
    (">", "greater"),
    ("?", "question"),
    ("@", "at"),
    ("[", "left bracket"),
    ("\\", "backslash"),
    ("]", "right bracket"),
    ("^", "caret"),
    ("_", "line"),
    ("`", "graav"),
    ("{", "left brace"),
    ("|", "bar"),
    ("}", "right brace"),
    ("~", "tilda"),
    ("\u{00A1}", "inverted exclamation point"),
    ("\u{00BF}", "inverted question mark"),
    ("\u{00B7}", "middle dot"),
    ("\u{2022}", "bullet"),
    ("\u{2026}", "dot dot dot"),
    ("\u{20AC}", "euro"),
    ("\u{00A3}", "pound"),
    ("\u{00A9}", "copyright"),
    ("\u{00AE}", "registered"),
    ("\u{00B0}", "degrees"),
];

const NATO_ALPHABET: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "Xray", "Yankee", "Zulu",
];

/// Look `locale` up, then its bare language (`fr_FR` → `fr`).
fn by_locale<'m, V>(map: &'m HashMap<String, V>, locale: &str) -> Option<&'m V> {
    map.get(locale).or_else(|| map.get(language_of(locale)))
}

/// Symbol names per locale.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    locales: HashMap<String, HashMap<String, SymbolName>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace and punctuation names for `en`.
    pub fn english() -> Self {
        let mut table = Self::new();
        for (symbol, name) in ENGLISH_SYMBOLS {
            table.insert("en", symbol, *name);
        }
        table
    }

    pub fn insert(&mut self, locale: &str, symbol: &str, name: impl Into<String>) {
        self.insert_name(locale, symbol, SymbolName::new(name));
    }

    pub fn insert_name(&mut self, locale: &str, symbol: &str, name: SymbolName) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(symbol.to_string(), name);
    }

    /// Add every `locale → symbol → name` entry, replacing existing names.
    pub fn merge(&mut self, entries: &HashMap<String, HashMap<String, String>>) {
        for (locale, symbols) in entries {
            for (symbol, name) in symbols {
                self.insert(locale, symbol, name.as_str());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.locales.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SymbolResolver for SymbolTable {
    fn symbol_name(&self, locale: &str, unit: &str) -> Option<SymbolName> {
        by_locale(&self.locales, locale)?.get(unit).cloned()
    }
}

/// Phonetic descriptions per locale, keyed by lowercase character.
#[derive(Debug, Clone, Default)]
pub struct DescriptionTable {
    locales: HashMap<String, HashMap<String, Vec<String>>>,
}

impl DescriptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The NATO spelling alphabet for `en`.
    pub fn nato() -> Self {
        let mut table = Self::new();
        for (letter, word) in ('a'..='z').zip(NATO_ALPHABET) {
            table.insert("en", &letter.to_string(), vec![word.to_string()]);
        }
        table
    }

    pub fn insert(&mut self, locale: &str, character: &str, descriptions: Vec<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(character.to_lowercase(), descriptions);
    }

    pub fn merge(&mut self, entries: &HashMap<String, HashMap<String, Vec<String>>>) {
        for (locale, characters) in entries {
            for (character, descriptions) in characters {
                self.insert(locale, character, descriptions.clone());
            }
        }
    }
}

impl CharacterDescriber for DescriptionTable {
    fn describe(&self, locale: &str, unit: &str) -> Option<Vec<String>> {
        by_locale(&self.locales, locale)?
            .get(&unit.to_lowercase())
            .filter(|d| !d.is_empty())
            .cloned()
    }
}

/// Translations keyed by their untranslated message.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn insert(&mut self, key: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(key.into(), translation.into());
    }
}

impl From<HashMap<String, String>> for Catalog {
    fn from(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }
}

impl MessageCatalog for Catalog {
    fn gettext(&self, key: &str) -> Option<String> {
        self.messages.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSettings {
    pub auto_language_switching: bool,
    pub auto_dialect_switching: bool,
}

impl LiveSettings for StaticSettings {
    fn auto_language_switching(&self) -> bool {
        self.auto_language_switching
    }

    fn auto_dialect_switching(&self) -> bool {
        self.auto_dialect_switching
    }
}
