//! Speech commands produced by the spelling pipeline.
//!
//! A downstream speech driver turns each variant into a synthesizer call:
//! `Text` is spoken, `EndUtterance` is a pause hint, the rest adjust voice state.

use std::fmt;

use serde::Serialize;

/// Tone played before a capital letter: frequency (Hz), duration (ms), volumes.
pub const CAP_BEEP: (u32, u32, u8, u8) = (2000, 50, 50, 50);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    /// Literal string to speak.
    Text(String),
    /// The synthesizer may pause or flush here.
    EndUtterance,
    /// Toggle per-character spelling mode on the active voice.
    CharacterMode(bool),
    /// Relative pitch change in percent. `None` resets to the baseline.
    Pitch(Option<i32>),
    Beep {
        hz: u32,
        length_ms: u32,
        left: u8,
        right: u8,
    },
    /// Switch the voice to another locale.
    LangChange(String),
}

impl Command {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn cap_beep() -> Self {
        let (hz, length_ms, left, right) = CAP_BEEP;
        Self::Beep {
            hz,
            length_ms,
            left,
            right,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::EndUtterance => write!(f, "EndUtterance"),
            Self::CharacterMode(on) => write!(f, "CharacterMode({on})"),
            Self::Pitch(Some(offset)) => write!(f, "Pitch(offset={offset})"),
            Self::Pitch(None) => write!(f, "Pitch()"),
            Self::Beep {
                hz,
                length_ms,
                left,
                right,
            } => write!(f, "Beep({hz}, {length_ms}, left={left}, right={right})"),
            Self::LangChange(locale) => write!(f, "LangChange({locale})"),
        }
    }
}
