//! Operating-system entropy.
//!
//! Uses the operating system's cryptographic random source via `rand`.

use rand::rngs::OsRng;
use rand::RngCore;

use super::ByteSource;
use crate::error::{RandomError, Result};

/// The platform's cryptographically secure random source.
///
/// This is the default source of every [`crate::Generator`]. It holds no
/// state, so it is freely shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsSource;

impl ByteSource for OsSource {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| RandomError::EntropyUnavailable(e.to_string()))
    }
}
