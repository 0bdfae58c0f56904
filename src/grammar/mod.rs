mod error;

pub use error::{GrammarError, GrammarErrorKind};

use compact_str::{CompactString, ToCompactString};
use glam::Vec2;
use std::collections::HashMap;

/// Context-free production rules: one replacement sequence per symbol.
///
/// A symbol without an entry is a terminal and rewrites to itself. An entry
/// with an empty replacement erases the symbol from the next generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    productions: HashMap<char, CompactString>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: char, replacement: &str) {
        self.productions
            .insert(symbol, replacement.to_compact_string());
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.productions.get(&symbol).map(|r| r.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.productions.iter().map(|(&s, r)| (s, r.as_str()))
    }

    /// Length of the longest replacement, or 1 if there are no rules.
    /// Used to bound per-pass growth when preallocating.
    pub fn max_replacement_len(&self) -> usize {
        self.productions
            .values()
            .map(|r| r.len())
            .max()
            .unwrap_or(1)
            .max(1)
    }
}

impl<'a> FromIterator<(char, &'a str)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (char, &'a str)>>(iter: T) -> Self {
        let mut rules = Self::new();
        for (symbol, replacement) in iter {
            rules.insert(symbol, replacement);
        }
        rules
    }
}

/// A complete L-system definition: the rewriting grammar plus the drawing
/// parameters the turtle needs to interpret its output.
///
/// Immutable once constructed. Negative iteration counts are unrepresentable
/// by type; the real-valued fields are checked by [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub axiom: CompactString,
    pub rules: RuleSet,
    pub angle_degrees: f32,
    pub iterations: u32,
    pub start: Vec2,
    pub initial_heading: f32,
    pub step_length: f32,
    pub pen_width: f32,
}

impl Grammar {
    /// Checks that the drawing parameters are usable before any expansion
    /// work begins.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if !(self.angle_degrees > 0.0) {
            return Err(GrammarError {
                kind: GrammarErrorKind::NonPositiveAngle(self.angle_degrees),
            });
        }
        if !(self.step_length > 0.0) {
            return Err(GrammarError {
                kind: GrammarErrorKind::NonPositiveStepLength(self.step_length),
            });
        }
        if !(self.pen_width > 0.0) {
            return Err(GrammarError {
                kind: GrammarErrorKind::NonPositivePenWidth(self.pen_width),
            });
        }
        Ok(())
    }
}
