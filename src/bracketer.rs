//! Character mode bracketing.
//!
//! Synthesizers read a run of letters as a word unless told to spell. This
//! pass keeps track of whether the voice is in character mode and switches it
//! on before literal characters and off before named ones. A unit is never
//! split, so the toggle lands before any capital cues it carries. The mode is
//! left as is when the input runs out.

use std::vec::IntoIter;

use crate::command::Command;
use crate::expander::{SpellingUnit, UnitKind};

pub struct CharacterModeBracketer<I> {
    units: I,
    in_character_mode: bool,
    current: IntoIter<Command>,
}

impl<I> CharacterModeBracketer<I>
where
    I: Iterator<Item = SpellingUnit>,
{
    pub fn new(units: I) -> Self {
        Self {
            units,
            in_character_mode: false,
            current: Vec::new().into_iter(),
        }
    }

    /// Toggle needed before a unit of `kind`, updating the tracked mode.
    fn transition(&mut self, kind: UnitKind) -> Option<Command> {
        match (kind, self.in_character_mode) {
            (UnitKind::LiteralChar, false) => {
                self.in_character_mode = true;
                Some(Command::CharacterMode(true))
            }
            (UnitKind::Named, true) => {
                self.in_character_mode = false;
                Some(Command::CharacterMode(false))
            }
            _ => None,
        }
    }
}

impl<I> Iterator for CharacterModeBracketer<I>
where
    I: Iterator<Item = SpellingUnit>,
{
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        loop {
            if let Some(command) = self.current.next() {
                return Some(command);
            }
            let unit = self.units.next()?;
            self.current = unit.commands.into_iter();
            if let Some(toggle) = self.transition(unit.kind) {
                return Some(toggle);
            }
        }
    }
}
