//! Character-to-button mapping for terminal keypad input
//!
//! Buttons arrive one character at a time, but the keypad carries
//! multi-character and non-ASCII symbols (`cos`, `π`, `√`, `×`, `÷`).
//! The keymap bridges that gap: digits pass through, known symbols
//! resolve directly, and single-character ASCII aliases make the rest
//! of the keypad reachable from a plain terminal. User configuration
//! can add or override aliases.

use std::collections::HashMap;

use crate::domain::operations;

/// One decoded button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    /// Digit or decimal point, fed to the coordinator as typed text
    Digit(char),
    /// Operation symbol from the keypad table
    Operation(String),
    /// Character with no keypad meaning; logged and dropped upstream
    Unrecognized(char),
}

/// Resolves raw characters to keypad buttons
#[derive(Debug, Clone)]
pub struct Keymap {
    aliases: HashMap<char, String>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    /// Creates the built-in mapping
    ///
    /// Built-in aliases:
    /// `p` → π, `r` → √, `c` → cos, `n` → ±, `*` and `x` → ×, `/` → ÷
    pub fn new() -> Self {
        let mut aliases = HashMap::new();
        for (key, symbol) in [
            ('p', "π"),
            ('r', "√"),
            ('c', "cos"),
            ('n', "±"),
            ('*', "×"),
            ('x', "×"),
            ('/', "÷"),
        ] {
            aliases.insert(key, symbol.to_string());
        }

        Self { aliases }
    }

    /// Adds or overrides a single alias
    ///
    /// # Arguments
    /// * `key` - Character typed at the terminal
    /// * `symbol` - Keypad symbol the key should produce
    pub fn insert_alias(&mut self, key: char, symbol: &str) {
        self.aliases.insert(key, symbol.to_string());
    }

    /// Decodes a single character into a button press
    pub fn resolve(&self, ch: char) -> Button {
        if ch.is_ascii_digit() || ch == '.' {
            return Button::Digit(ch);
        }

        if let Some(symbol) = self.aliases.get(&ch) {
            return Button::Operation(symbol.clone());
        }

        // Symbols that are a single character ('+', '=', 'π', ...) need
        // no alias and resolve through the operation table directly.
        let direct = ch.to_string();
        if operations::lookup(&direct).is_some() {
            return Button::Operation(direct);
        }

        Button::Unrecognized(ch)
    }

    /// Decodes a whole input line, skipping whitespace
    pub fn tokenize(&self, line: &str) -> Vec<Button> {
        line.chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| self.resolve(ch))
            .collect()
    }
}
