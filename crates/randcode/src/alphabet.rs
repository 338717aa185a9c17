//! Alphabets and the named alphabet presets.
//!
//! An alphabet is an ordered sequence of 1 to 256 distinct symbols. Each
//! symbol is one Unicode scalar value, so multi-byte characters such as
//! `ä` or `€` count as a single symbol whether the alphabet is built from
//! text or from an explicit symbol list.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RandomError, Result};

/// Number of distinct values a single random byte can take.
pub const BYTE_CHOICES: usize = 256;

/// Alphanumeric (62): lowercase, uppercase and digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Letters (52): lowercase and uppercase.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Uppercase letters (26).
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase letters (26).
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits (10).
pub const DIGITS: &str = "0123456789";
/// Decimal digits without zero (9).
pub const DIGITS_NO_ZERO: &str = "123456789";
/// Lowercase hexadecimal digits (16).
pub const HEX_LOWER: &str = "abcdef0123456789";
/// URL-safe symbols (64), the alphanumeric set plus `_` and `-`.
pub const URL_SAFE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-";

/// An ordered set of distinct symbols that output characters are drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from text, one symbol per character.
    pub fn new(text: &str) -> Result<Self> {
        Self::from_symbols(text.chars())
    }

    /// Build an alphabet from an explicit, ordered list of symbols.
    ///
    /// Fails with [`RandomError::EmptyAlphabet`] for no symbols,
    /// [`RandomError::AlphabetTooLarge`] for more than 256, and
    /// [`RandomError::DuplicateSymbol`] when a symbol repeats.
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.is_empty() {
            return Err(RandomError::EmptyAlphabet);
        }
        if symbols.len() > BYTE_CHOICES {
            return Err(RandomError::AlphabetTooLarge {
                size: symbols.len(),
            });
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(RandomError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols })
    }

    /// Number of symbols, always in `1..=256`.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The symbol at `index`, if any.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Whether every character of `text` belongs to this alphabet.
    pub fn covers(&self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }

    // Presets are checked in tests; skip re-validating them at runtime.
    fn from_preset(text: &'static str) -> Self {
        Self {
            symbols: text.chars().collect(),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Preset::Alphanumeric.alphabet()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = RandomError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = RandomError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = RandomError;

    fn try_from(value: Vec<char>) -> Result<Self> {
        Self::from_symbols(value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

impl From<Preset> for Alphabet {
    fn from(preset: Preset) -> Self {
        preset.alphabet()
    }
}

/// Named alphabet presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Alphanumeric,
    Letters,
    Uppercase,
    Lowercase,
    Digits,
    DigitsNoZero,
    Hex,
    UrlSafe,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 8] = [
        Preset::Alphanumeric,
        Preset::Letters,
        Preset::Uppercase,
        Preset::Lowercase,
        Preset::Digits,
        Preset::DigitsNoZero,
        Preset::Hex,
        Preset::UrlSafe,
    ];

    /// The preset's symbols as text.
    pub fn symbols(self) -> &'static str {
        match self {
            Preset::Alphanumeric => ALPHANUMERIC,
            Preset::Letters => LETTERS,
            Preset::Uppercase => UPPERCASE,
            Preset::Lowercase => LOWERCASE,
            Preset::Digits => DIGITS,
            Preset::DigitsNoZero => DIGITS_NO_ZERO,
            Preset::Hex => HEX_LOWER,
            Preset::UrlSafe => URL_SAFE,
        }
    }

    /// The preset as an [`Alphabet`].
    pub fn alphabet(self) -> Alphabet {
        Alphabet::from_preset(self.symbols())
    }

    /// Stable snake_case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Alphanumeric => "alphanumeric",
            Preset::Letters => "letters",
            Preset::Uppercase => "uppercase",
            Preset::Lowercase => "lowercase",
            Preset::Digits => "digits",
            Preset::DigitsNoZero => "digits_no_zero",
            Preset::Hex => "hex",
            Preset::UrlSafe => "url_safe",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| format!("unknown alphabet preset '{s}'"))
    }
}
