//! Mapping uniformly distributed bytes onto an alphabet.
//!
//! A plain `byte % size` favours the first `256 % size` symbols. Instead
//! the byte range is cut into `size` consecutive buckets of width
//! `256 / size` and each byte selects the bucket it falls into:
//!
//! ```text
//! index = floor(byte / (256 / size)) = (byte * size) / 256
//! ```
//!
//! The right-hand side is evaluated in integer arithmetic, so there is no
//! floating-point rounding. Because `byte <= 255`, `byte * size / 256` is
//! strictly below `size` and the index is always in range; the last
//! bucket never spills over. Every symbol `k` is reachable through byte
//! `ceil(k * 256 / size)`.
//!
//! When 256 is not a multiple of `size` the buckets differ in width by
//! one byte, so some symbols are slightly more likely than others
//! (at most 1/256 apart). This is an accepted approximation; sizes that
//! divide 256 (2, 4, 8, 16, 32, 64, 128, 256) are exactly uniform.

use crate::alphabet::{Alphabet, BYTE_CHOICES};

/// Index of the bucket that `byte` falls into for an alphabet of `size` symbols.
///
/// `size` must be in `1..=256`; the result is always `< size`.
pub fn bucket_index(byte: u8, size: usize) -> usize {
    debug_assert!((1..=BYTE_CHOICES).contains(&size));
    (usize::from(byte) * size) / BYTE_CHOICES
}

/// Map each byte to one symbol of `alphabet`, producing one symbol per byte.
pub fn map_bytes(bytes: &[u8], alphabet: &Alphabet) -> String {
    let symbols = alphabet.symbols();
    let size = symbols.len();

    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        out.push(symbols[bucket_index(byte, size)]);
    }
    out
}
