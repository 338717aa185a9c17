//! The generator: random strings, hex tokens and numeric codes.
//!
//! A [`Generator`] owns its [`ByteSource`] and has no other state. Every
//! method draws fresh bytes for its own use, so one generator can be
//! shared by reference across threads whenever the source allows it.

use zeroize::Zeroizing;

use crate::alphabet::{Alphabet, Preset, DIGITS_NO_ZERO};
use crate::error::{RandomError, Result};
use crate::mapper::map_bytes;
use crate::source::{ByteSource, OsSource};

/// Default length of [`Generator::alphanumeric`] style strings.
pub const DEFAULT_STRING_LENGTH: usize = 6;

/// Default number of digits of [`Generator::number`].
pub const DEFAULT_NUMBER_LENGTH: usize = 8;

/// Consecutive rejected 64-bit samples after which a source is considered broken.
const MAX_REJECTIONS: usize = 64;

/// Produces random strings over alphabets from an injected byte source.
#[derive(Debug, Clone, Default)]
pub struct Generator<S = OsSource> {
    source: S,
}

impl Generator<OsSource> {
    /// A generator backed by the operating system's CSPRNG.
    pub fn new() -> Self {
        Self { source: OsSource }
    }
}

impl<S: ByteSource> Generator<S> {
    /// A generator drawing all of its randomness from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The underlying byte source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the generator, returning its byte source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// A string of exactly `length` symbols drawn from `alphabet`.
    ///
    /// Draws `length` bytes and maps each onto one symbol. `length == 0`
    /// returns an empty string without drawing any bytes.
    pub fn string(&self, length: usize, alphabet: &Alphabet) -> Result<String> {
        log::trace!("string: length={length}, alphabet_size={}", alphabet.len());
        if length == 0 {
            return Ok(String::new());
        }
        let bytes = self.source.random_bytes(length)?;
        Ok(map_bytes(&bytes, alphabet))
    }

    /// Like [`Generator::string`], with the alphabet given as text.
    ///
    /// Each character of `symbols` is one symbol, so a 300-character
    /// text fails with [`RandomError::AlphabetTooLarge`].
    pub fn string_from(&self, length: usize, symbols: &str) -> Result<String> {
        let alphabet = Alphabet::new(symbols)?;
        self.string(length, &alphabet)
    }

    /// A string of `length` symbols from a named preset.
    pub fn preset(&self, length: usize, preset: Preset) -> Result<String> {
        self.string(length, &preset.alphabet())
    }

    /// An alphanumeric string (62 symbols), the default alphabet.
    pub fn alphanumeric(&self, length: usize) -> Result<String> {
        self.preset(length, Preset::Alphanumeric)
    }

    /// Lowercase hex of `length / 2` random bytes.
    ///
    /// The output has `2 * (length / 2)` characters: an odd `length` is
    /// truncated to the even length below it, never rounded up. Bytes are
    /// encoded directly, without going through the alphabet mapper.
    pub fn hex(&self, length: usize) -> Result<String> {
        log::trace!("hex: length={length}");
        let bytes = self.source.random_bytes(length / 2)?;
        Ok(hex::encode(bytes.as_slice()))
    }

    /// A numeric code of `length` decimal digits.
    ///
    /// With `no_zero_first` the first digit is always drawn, exactly
    /// uniformly from `1..=9`, and the remaining `length - 1` digits come
    /// from `0..=9`; so `number(0, true)` still yields one digit. Without
    /// it every digit comes from `0..=9` and `length == 0` is empty. The
    /// result is text, so any length works.
    pub fn number(&self, length: usize, no_zero_first: bool) -> Result<String> {
        log::trace!("number: length={length}, no_zero_first={no_zero_first}");
        let mut number = String::with_capacity(length.max(1));
        let mut remaining = length;

        if no_zero_first {
            let first = DIGITS_NO_ZERO.as_bytes()[self.uniform_below(DIGITS_NO_ZERO.len())?];
            number.push(char::from(first));
            remaining = remaining.saturating_sub(1);
        }
        if remaining > 0 {
            number.push_str(&self.preset(remaining, Preset::Digits)?);
        }
        Ok(number)
    }

    /// A uniformly distributed integer in `0..n`.
    ///
    /// Uses rejection sampling over 64-bit samples, so there is no modulo
    /// bias. Returns 0 for `n <= 1` without drawing bytes. A source that
    /// keeps producing rejected samples is reported as
    /// [`RandomError::EntropyUnavailable`].
    pub fn uniform_below(&self, n: usize) -> Result<usize> {
        if n <= 1 {
            return Ok(0);
        }
        let n = n as u64;
        // Values above `zone` would make the low residues more likely.
        let zone = u64::MAX - (u64::MAX - n + 1) % n;

        let mut sample = Zeroizing::new([0u8; 8]);
        for _ in 0..MAX_REJECTIONS {
            self.source.fill_bytes(sample.as_mut_slice())?;
            let value = u64::from_le_bytes(*sample);
            if value <= zone {
                return Ok((value % n) as usize);
            }
        }
        Err(RandomError::EntropyUnavailable(format!(
            "byte source produced {MAX_REJECTIONS} consecutive out-of-range samples"
        )))
    }

    /// A uniformly distributed integer in `min..=max`. Requires `min <= max`.
    pub fn range_inclusive(&self, min: usize, max: usize) -> Result<usize> {
        debug_assert!(min <= max);
        match max.saturating_sub(min).checked_add(1) {
            Some(count) => Ok(min + self.uniform_below(count)?),
            None => {
                // 0..=usize::MAX: every sample is in range.
                let mut sample = Zeroizing::new([0u8; 8]);
                self.source.fill_bytes(sample.as_mut_slice())?;
                Ok(u64::from_le_bytes(*sample) as usize)
            }
        }
    }

    /// Shuffle `items` in place with an unbiased Fisher–Yates permutation.
    pub fn shuffle<T>(&self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.uniform_below(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}
