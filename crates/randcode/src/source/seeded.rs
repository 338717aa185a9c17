//! Reproducible, NON-cryptographic byte source.
//!
//! Useful for demos, fixtures and reproducing a generated value from a
//! known seed. Anyone who learns the seed can recompute every output, so
//! never use it for secrets. Nothing in randcode falls back to it; callers
//! have to construct it explicitly.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::ByteSource;
use crate::error::{RandomError, Result};

/// Deterministic byte stream derived from a `u64` seed. Not cryptographic.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a source whose output is fully determined by `seed`.
    pub fn insecure_from_seed(seed: u64) -> Self {
        log::debug!("seeded byte source created; output is not cryptographic");
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ByteSource for SeededSource {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RandomError::EntropyUnavailable("seeded source lock poisoned".into()))?;
        rng.fill_bytes(buf);
        Ok(())
    }
}
