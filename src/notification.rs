//! Capital letter notification.
//!
//! Decorates one spoken character with the cues a user asked for: a pitch
//! change, a beep, the localized word "cap", and a "normalized" report.

use tracing::debug;

use crate::command::Command;
use crate::env::{translate, MessageCatalog};

/// Catalog key for the "cap" announcement. Holds exactly one placeholder.
pub const CAP_TEMPLATE_KEY: &str = "cap %s";
pub const NORMALIZED_KEY: &str = " normalized";
const PLACEHOLDER: &str = "%s";

/// The localized "cap" word split around the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapAffixes {
    pub prefix: String,
    pub suffix: String,
}

impl CapAffixes {
    /// Split a translated template such as `"cap %s"` or `"%s cap"`.
    ///
    /// Templates without exactly one placeholder fall back to the
    /// untranslated `"cap %s"` shape.
    pub fn from_template(template: &str) -> Self {
        let template = if template.matches(PLACEHOLDER).count() == 1 {
            template
        } else {
            debug!("Malformed cap template {template:?}, using default");
            CAP_TEMPLATE_KEY
        };
        // The count check above guarantees a match.
        let at = template.find(PLACEHOLDER).unwrap_or(template.len());
        // "%s cap" yields an empty prefix, "cap %s" an empty suffix.
        Self {
            prefix: template[..at].to_string(),
            suffix: template[(at + PLACEHOLDER.len()).min(template.len())..].to_string(),
        }
    }

    /// Read the template from the catalog as it is right now.
    pub fn current(catalog: &dyn MessageCatalog) -> Self {
        Self::from_template(&translate(catalog, CAP_TEMPLATE_KEY))
    }
}

/// Decoration flags for a single character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapNotification {
    pub say_cap: bool,
    /// Percent; 0 disables the pitch change.
    pub pitch_change: i32,
    pub beep: bool,
    pub report_normalized: bool,
}

impl CapNotification {
    /// Commands for `char_text`, in the fixed order pitch, beep, prefix,
    /// character, suffix, normalized, pitch reset.
    pub fn wrap(&self, char_text: &str, catalog: &dyn MessageCatalog) -> Vec<Command> {
        let mut out = Vec::with_capacity(7);
        if self.pitch_change != 0 {
            out.push(Command::Pitch(Some(self.pitch_change)));
        }
        if self.beep {
            out.push(Command::cap_beep());
        }
        let affixes = self.say_cap.then(|| CapAffixes::current(catalog));
        if let Some(CapAffixes { prefix, .. }) = &affixes {
            if !prefix.is_empty() {
                out.push(Command::text(prefix.as_str()));
            }
        }
        out.push(Command::text(char_text));
        if let Some(CapAffixes { suffix, .. }) = affixes {
            if !suffix.is_empty() {
                out.push(Command::Text(suffix));
            }
        }
        if self.report_normalized {
            out.push(Command::Text(translate(catalog, NORMALIZED_KEY)));
        }
        if self.pitch_change != 0 {
            out.push(Command::Pitch(None));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Catalog;

    fn wrap(n: CapNotification, catalog: &Catalog) -> Vec<Command> {
        n.wrap("A", catalog)
    }

    #[test]
    fn no_notifications() {
        let out = wrap(CapNotification::default(), &Catalog::default());
        assert_eq!(out, vec![Command::text("A")]);
    }

    #[test]
    fn pitch_is_reset_inside_the_unit() {
        let n = CapNotification {
            pitch_change: 30,
            ..Default::default()
        };
        assert_eq!(
            wrap(n, &Catalog::default()),
            vec![
                Command::Pitch(Some(30)),
                Command::text("A"),
                Command::Pitch(None)
            ]
        );
    }

    #[test]
    fn beep_only() {
        let n = CapNotification {
            beep: true,
            ..Default::default()
        };
        assert_eq!(
            wrap(n, &Catalog::default()),
            vec![Command::cap_beep(), Command::text("A")]
        );
    }

    #[test]
    fn cap_word_before_character() {
        let n = CapNotification {
            say_cap: true,
            ..Default::default()
        };
        assert_eq!(
            wrap(n, &Catalog::default()),
            vec![Command::text("cap "), Command::text("A")]
        );
    }

    #[test]
    fn cap_word_after_character_when_translated_so() {
        let mut catalog = Catalog::default();
        catalog.insert(CAP_TEMPLATE_KEY, "%s cap");
        let n = CapNotification {
            say_cap: true,
            pitch_change: 30,
            beep: true,
            ..Default::default()
        };
        assert_eq!(
            wrap(n, &catalog),
            vec![
                Command::Pitch(Some(30)),
                Command::cap_beep(),
                Command::text("A"),
                Command::text(" cap"),
                Command::Pitch(None),
            ]
        );
    }

    #[test]
    fn normalized_only() {
        let n = CapNotification {
            report_normalized: true,
            ..Default::default()
        };
        assert_eq!(
            wrap(n, &Catalog::default()),
            vec![Command::text("A"), Command::text(" normalized")]
        );
    }

    #[test]
    fn all_notifications() {
        let n = CapNotification {
            say_cap: true,
            pitch_change: 30,
            beep: true,
            report_normalized: true,
        };
        assert_eq!(
            wrap(n, &Catalog::default()),
            vec![
                Command::Pitch(Some(30)),
                Command::cap_beep(),
                Command::text("cap "),
                Command::text("A"),
                Command::text(" normalized"),
                Command::Pitch(None),
            ]
        );
    }

    #[test]
    fn template_is_read_on_every_call() {
        let n = CapNotification {
            say_cap: true,
            ..Default::default()
        };
        let mut catalog = Catalog::default();
        assert_eq!(n.wrap("B", &catalog)[0], Command::text("cap "));
        catalog.insert(CAP_TEMPLATE_KEY, "%s majuscule");
        assert_eq!(
            n.wrap("B", &catalog),
            vec![Command::text("B"), Command::text(" majuscule")]
        );
    }

    #[test]
    fn malformed_templates_fall_back() {
        let default = CapAffixes::from_template(CAP_TEMPLATE_KEY);
        assert_eq!(CapAffixes::from_template("cap"), default);
        assert_eq!(CapAffixes::from_template("%s cap %s"), default);
        assert_eq!(
            default,
            CapAffixes {
                prefix: "cap ".into(),
                suffix: String::new()
            }
        );
    }
}
