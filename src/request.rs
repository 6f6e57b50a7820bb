//! Parameters for one spelling call.

/// What to spell and how to announce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingRequest {
    pub text: String,
    /// Locale the text is tagged with. `None` spells in the voice locale.
    pub locale: Option<String>,
    pub use_character_descriptions: bool,
    pub say_cap_for_capitals: bool,
    /// Percent; 0 disables the pitch change for capitals.
    pub cap_pitch_change: i32,
    pub beep_for_capitals: bool,
    pub unicode_normalization: bool,
    pub report_normalized_for_character_navigation: bool,
    /// With descriptions on, spell characters that have none literally
    /// instead of skipping them.
    pub fallback_to_char_if_no_description: bool,
}

impl Default for SpellingRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            locale: None,
            use_character_descriptions: false,
            say_cap_for_capitals: false,
            cap_pitch_change: 0,
            beep_for_capitals: false,
            unicode_normalization: false,
            report_normalized_for_character_navigation: false,
            fallback_to_char_if_no_description: true,
        }
    }
}

impl SpellingRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn character_descriptions(mut self, on: bool) -> Self {
        self.use_character_descriptions = on;
        self
    }

    pub fn say_cap(mut self, on: bool) -> Self {
        self.say_cap_for_capitals = on;
        self
    }

    pub fn cap_pitch(mut self, percent: i32) -> Self {
        self.cap_pitch_change = percent;
        self
    }

    pub fn beep(mut self, on: bool) -> Self {
        self.beep_for_capitals = on;
        self
    }

    /// Enable normalization, optionally announcing normalized characters.
    pub fn normalize(mut self, on: bool, report: bool) -> Self {
        self.unicode_normalization = on;
        self.report_normalized_for_character_navigation = report;
        self
    }

    pub fn fallback_to_char(mut self, on: bool) -> Self {
        self.fallback_to_char_if_no_description = on;
        self
    }

    /// Any of the capital letter cues is on.
    pub fn notifies_capitals(&self) -> bool {
        self.say_cap_for_capitals || self.cap_pitch_change != 0 || self.beep_for_capitals
    }
}
