//! char-speller: spell text out as speech synthesizer commands.
//!
//! Used by a screen reader to announce typed or navigated characters one at a
//! time. Pipeline:
//! - `expander`: text → spelling units (symbol names, descriptions, capitals,
//!   normalization, language switches)
//! - `notification`: pitch/beep/"cap" cues around one character
//! - `bracketer`: character mode toggles between units
//!
//! Everything is lazy: commands are computed as the speech driver pulls them.

pub mod bracketer;
pub mod command;
pub mod config;
pub mod env;
pub mod expander;
pub mod notification;
pub mod request;
pub mod tables;

pub use bracketer::CharacterModeBracketer;
pub use command::Command;
pub use env::{
    CharacterDescriber, LiveSettings, MessageCatalog, SpellingEnv, SymbolName, SymbolResolver,
};
pub use expander::{SpellingExpander, SpellingUnit, UnitKind};
pub use notification::CapNotification;
pub use request::SpellingRequest;

/// Spell `request` with character mode toggled around literal characters.
pub fn spell<'a>(
    request: &'a SpellingRequest,
    env: SpellingEnv<'a>,
) -> impl Iterator<Item = Command> + 'a {
    CharacterModeBracketer::new(SpellingExpander::new(request, env))
}

/// Spell `request` without character mode commands.
pub fn spell_without_character_mode<'a>(
    request: &'a SpellingRequest,
    env: SpellingEnv<'a>,
) -> impl Iterator<Item = Command> + 'a {
    SpellingExpander::new(request, env).flat_map(|unit| unit.commands)
}
