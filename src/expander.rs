//! Text → spelling units.
//!
//! Each unit is the run of commands for one spoken character, ending with an
//! utterance boundary. Units are produced lazily, one per `next()` call:
//!
//! 1. Pick the text: empty text is "blank", trailing whitespace is dropped
//!    unless the text is only whitespace.
//! 2. Split it into characters, optionally composing or expanding them with
//!    NFKC normalization.
//! 3. Resolve each character to a symbol name, a description or itself, and
//!    decorate capitals.

use std::collections::VecDeque;
use std::str::Chars;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use crate::command::Command;
use crate::env::{translate, SpellingEnv, SymbolName};
use crate::notification::CapNotification;
use crate::request::SpellingRequest;

pub const BLANK_KEY: &str = "blank";
/// Joins multiple descriptions of a lone character.
const DESCRIPTION_SEPARATOR: &str = "\u{3001}";

/// How the bracketer should treat a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// The character itself is spoken.
    LiteralChar,
    /// A symbol name, description or fixed word is spoken instead.
    Named,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingUnit {
    pub kind: UnitKind,
    pub commands: Vec<Command>,
}

/// One character to spell, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece {
    text: String,
    /// Characters of `text` without the separating spaces.
    parts: Vec<char>,
    /// NFKC changed this character.
    normalized: bool,
}

impl Piece {
    fn raw(c: char) -> Self {
        Self {
            text: c.to_string(),
            parts: vec![c],
            normalized: false,
        }
    }
}

enum Pieces<'a> {
    Codepoints(Chars<'a>),
    Normalized {
        graphemes: Graphemes<'a>,
        pending: VecDeque<Piece>,
    },
}

impl<'a> Pieces<'a> {
    fn new(text: &'a str, normalize: bool) -> Self {
        if normalize {
            Self::Normalized {
                graphemes: text.graphemes(true),
                pending: VecDeque::new(),
            }
        } else {
            Self::Codepoints(text.chars())
        }
    }
}

impl Iterator for Pieces<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        match self {
            Self::Codepoints(chars) => chars.next().map(Piece::raw),
            Self::Normalized { graphemes, pending } => loop {
                if let Some(piece) = pending.pop_front() {
                    return Some(piece);
                }
                let cluster = graphemes.next()?;
                let composed: String = cluster.nfkc().collect();
                if composed == cluster {
                    pending.extend(cluster.chars().map(Piece::raw));
                } else {
                    debug!("Normalized {cluster:?} to {composed:?}");
                    return Some(Piece {
                        text: spaced(&composed),
                        parts: composed.chars().collect(),
                        normalized: true,
                    });
                }
            },
        }
    }
}

/// "ij" → "i j", so an expanded ligature is spoken letter by letter.
fn spaced(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for (i, c) in s.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Unicode White_Space plus the information separators U+001C..U+001F.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// At least one cased character and no lowercase ones.
pub fn is_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Lazy producer of spelling units for one request.
pub struct SpellingExpander<'a> {
    request: &'a SpellingRequest,
    env: SpellingEnv<'a>,
    pieces: Pieces<'a>,
    /// Locale every unit is spelled in.
    locale: String,
    /// Locale of the voice after the last emitted unit.
    voice_locale: String,
    single_char: bool,
    blank: bool,
}

impl<'a> SpellingExpander<'a> {
    pub fn new(request: &'a SpellingRequest, env: SpellingEnv<'a>) -> Self {
        let trimmed = request.text.trim_end_matches(is_space);
        let text = if trimmed.is_empty() {
            request.text.as_str()
        } else {
            trimmed
        };
        // Counted in units, so a composed "E\u{301}" is a lone character.
        let single_char =
            !text.is_empty() && Pieces::new(text, request.unicode_normalization).nth(1).is_none();
        Self {
            request,
            env,
            pieces: Pieces::new(text, request.unicode_normalization),
            locale: env.resolve_locale(request.locale.as_deref()),
            voice_locale: env.default_locale.to_string(),
            single_char,
            blank: text.is_empty(),
        }
    }

    fn spell(&mut self, piece: Piece) -> Option<SpellingUnit> {
        let req = self.request;
        let (spoken, kind, marked) = match self.symbol_name(&piece) {
            Some(symbol) => (symbol.text, UnitKind::Named, symbol.marks_normalized),
            None => match self.description(&piece.text) {
                Some(description) => (description, UnitKind::Named, false),
                None if req.use_character_descriptions
                    && !req.fallback_to_char_if_no_description =>
                {
                    debug!("No description for {:?}, skipping", piece.text);
                    return None;
                }
                None => (piece.text.clone(), UnitKind::LiteralChar, false),
            },
        };

        let mut commands = Vec::new();
        if self.env.settings.auto_language_switching() && self.locale != self.voice_locale {
            debug!("Switching voice from {} to {}", self.voice_locale, self.locale);
            self.voice_locale = self.locale.clone();
            commands.push(Command::LangChange(self.locale.clone()));
        }

        let uppercase = is_uppercase(&piece.text);
        let report_normalized =
            piece.normalized && req.report_normalized_for_character_navigation && !marked;
        if (uppercase && req.notifies_capitals()) || report_normalized {
            let notification = CapNotification {
                say_cap: uppercase && req.say_cap_for_capitals,
                pitch_change: if uppercase { req.cap_pitch_change } else { 0 },
                beep: uppercase && req.beep_for_capitals,
                report_normalized,
            };
            commands.extend(notification.wrap(&spoken, self.env.catalog));
        } else {
            commands.push(Command::Text(spoken));
        }
        commands.push(Command::EndUtterance);
        Some(SpellingUnit { kind, commands })
    }

    /// Symbol name for the piece. An expanded piece ("…" → "...") is named
    /// part by part and counts as named if any part has a name.
    fn symbol_name(&self, piece: &Piece) -> Option<SymbolName> {
        let symbols = self.env.symbols;
        if piece.parts.len() < 2 {
            return symbols.symbol_name(&self.locale, &piece.text);
        }
        let mut named = false;
        let mut marks_normalized = false;
        let spoken: Vec<String> = piece
            .parts
            .iter()
            .map(|c| {
                let part = c.to_string();
                match symbols.symbol_name(&self.locale, &part) {
                    Some(symbol) => {
                        named = true;
                        marks_normalized |= symbol.marks_normalized;
                        symbol.text
                    }
                    None => part,
                }
            })
            .collect();
        named.then(|| SymbolName {
            text: spoken.join(" "),
            marks_normalized,
        })
    }

    fn description(&self, unit: &str) -> Option<String> {
        if !self.request.use_character_descriptions {
            return None;
        }
        let descriptions = self.env.descriptions.describe(&self.locale, unit)?;
        if self.single_char {
            let joined = descriptions.join(DESCRIPTION_SEPARATOR);
            (!joined.is_empty()).then_some(joined)
        } else {
            descriptions.into_iter().next()
        }
    }
}

impl Iterator for SpellingExpander<'_> {
    type Item = SpellingUnit;

    fn next(&mut self) -> Option<SpellingUnit> {
        if self.blank {
            self.blank = false;
            return Some(SpellingUnit {
                kind: UnitKind::Named,
                commands: vec![Command::Text(translate(self.env.catalog, BLANK_KEY))],
            });
        }
        loop {
            let piece = self.pieces.next()?;
            if let Some(unit) = self.spell(piece) {
                return Some(unit);
            }
        }
    }
}
