//! Configuration management for char-speller.
//!
//! Loads config from YAML files in standard locations. Every section is
//! optional; missing keys take the defaults below.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::request::SpellingRequest;
use crate::tables::{Catalog, DescriptionTable, StaticSettings, SymbolTable};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub default_locale: String,
    pub auto_language_switching: bool,
    pub auto_dialect_switching: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            auto_language_switching: true,
            auto_dialect_switching: false,
        }
    }
}

impl SpeechConfig {
    pub fn settings(&self) -> StaticSettings {
        StaticSettings {
            auto_language_switching: self.auto_language_switching,
            auto_dialect_switching: self.auto_dialect_switching,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    pub use_character_descriptions: bool,
    pub say_cap_for_capitals: bool,
    pub cap_pitch_change: i32,
    pub beep_for_capitals: bool,
    pub unicode_normalization: bool,
    pub report_normalized_for_character_navigation: bool,
    pub fallback_to_char_if_no_description: bool,
    pub character_mode: bool,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            use_character_descriptions: false,
            say_cap_for_capitals: false,
            cap_pitch_change: 30,
            beep_for_capitals: false,
            unicode_normalization: false,
            report_normalized_for_character_navigation: true,
            fallback_to_char_if_no_description: true,
            character_mode: true,
        }
    }
}

impl SpellingConfig {
    /// Request for `text` carrying these settings.
    pub fn request(&self, text: impl Into<String>, locale: Option<String>) -> SpellingRequest {
        SpellingRequest {
            text: text.into(),
            locale,
            use_character_descriptions: self.use_character_descriptions,
            say_cap_for_capitals: self.say_cap_for_capitals,
            cap_pitch_change: self.cap_pitch_change,
            beep_for_capitals: self.beep_for_capitals,
            unicode_normalization: self.unicode_normalization,
            report_normalized_for_character_navigation: self
                .report_normalized_for_character_navigation,
            fallback_to_char_if_no_description: self.fallback_to_char_if_no_description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speech: SpeechConfig,
    pub spelling: SpellingConfig,
    /// locale → symbol → spoken name
    pub symbols: HashMap<String, HashMap<String, String>>,
    /// locale → character → descriptions
    pub descriptions: HashMap<String, HashMap<String, Vec<String>>>,
    /// untranslated message → translation
    pub messages: HashMap<String, String>,
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./char-speller.yaml
    /// 2. ~/.config/char-speller/config.yaml
    /// 3. /etc/char-speller/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("char-speller.yaml")),
                dirs::config_dir().map(|c| c.join("char-speller/config.yaml")),
                Some(PathBuf::from("/etc/char-speller/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(contents)
    }

    /// Built-in English symbols with the configured ones on top.
    pub fn symbol_table(&self) -> SymbolTable {
        let mut table = SymbolTable::english();
        table.merge(&self.symbols);
        table
    }

    /// Built-in NATO alphabet with the configured descriptions on top.
    pub fn description_table(&self) -> DescriptionTable {
        let mut table = DescriptionTable::nato();
        table.merge(&self.descriptions);
        table
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::from(self.messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CharacterDescriber, MessageCatalog, SymbolResolver};

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.speech.default_locale, "en");
        assert!(config.speech.auto_language_switching);
        assert_eq!(config.spelling.cap_pitch_change, 30);
        assert!(config.spelling.character_mode);
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let yaml = r#"
speech:
  default_locale: fr_FR
  auto_dialect_switching: true
spelling:
  say_cap_for_capitals: true
  cap_pitch_change: 0
  unicode_normalization: true
symbols:
  fr:
    "!": point d'exclamation
descriptions:
  fr:
    a: [Anatole]
messages:
  "cap %s": "%s majuscule"
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.speech.default_locale, "fr_FR");
        assert!(config.speech.settings().auto_dialect_switching);

        let request = config.spelling.request("Ab", Some("fr".into()));
        assert!(request.say_cap_for_capitals);
        assert_eq!(request.cap_pitch_change, 0);
        assert!(request.unicode_normalization);
        assert!(request.report_normalized_for_character_navigation);
        assert_eq!(request.locale.as_deref(), Some("fr"));

        let symbols = config.symbol_table();
        assert_eq!(
            symbols.symbol_name("fr_FR", "!").unwrap().text,
            "point d'exclamation"
        );
        assert_eq!(symbols.symbol_name("en", "!").unwrap().text, "bang");

        let descriptions = config.description_table();
        assert_eq!(descriptions.describe("fr", "A").unwrap(), vec!["Anatole"]);
        assert_eq!(
            config.catalog().gettext("cap %s").as_deref(),
            Some("%s majuscule")
        );
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(Config::parse("spelling: [1, 2").is_err());
        assert!(Config::parse("spelling:\n  cap_pitch_change: loud").is_err());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.yaml")));
        assert_eq!(config.speech.default_locale, "en");
        assert_eq!(config.spelling.cap_pitch_change, 30);
        assert!(config.messages.is_empty());
    }

    #[test]
    fn load_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "spelling: [1, 2").unwrap();
        let config = Config::load(Some(&path));
        assert_eq!(config.speech.default_locale, "en");
        assert!(!config.spelling.say_cap_for_capitals);
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "speech:\n  default_locale: de_DE\nspelling:\n  beep_for_capitals: true\nmessages:\n  blank: leer\n",
        )
        .unwrap();
        let config = Config::load(Some(&path));
        assert_eq!(config.speech.default_locale, "de_DE");
        assert!(config.spelling.beep_for_capitals);
        assert_eq!(config.spelling.cap_pitch_change, 30);
        assert_eq!(config.catalog().gettext("blank").as_deref(), Some("leer"));
    }
}
