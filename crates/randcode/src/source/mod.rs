//! Sources of random bytes.
//!
//! Everything in randcode consumes randomness through the [`ByteSource`]
//! trait. This module provides:
//! - [`OsSource`], the platform CSPRNG and the default everywhere
//! - [`from_fn`], to inject any function as a source (deterministic stubs in tests)
//! - [`SeededSource`], an explicitly non-cryptographic, reproducible source

pub mod os;
pub mod seeded;

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::error::Result;

pub use os::OsSource;
pub use seeded::SeededSource;

/// Supplies random bytes on demand.
///
/// Implementations fail with [`crate::RandomError::EntropyUnavailable`]
/// when they cannot produce bytes; they never degrade silently.
pub trait ByteSource {
    /// Fill `buf` completely with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()>;

    /// Produce `n` fresh random bytes, wiped from memory on drop.
    ///
    /// A zero-length request returns an empty buffer without touching the
    /// underlying source.
    fn random_bytes(&self, n: usize) -> Result<Zeroizing<Vec<u8>>> {
        let mut buf = Zeroizing::new(vec![0u8; n]);
        if n > 0 {
            self.fill_bytes(buf.as_mut_slice())?;
        }
        Ok(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Arc<S> {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

/// A [`ByteSource`] backed by a function. Created by [`from_fn`].
#[derive(Clone)]
pub struct FnSource<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

impl<F> ByteSource for FnSource<F>
where
    F: Fn(&mut [u8]) -> Result<()>,
{
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        (self.f)(buf)
    }
}

/// Wrap a function as a [`ByteSource`].
///
/// The function receives the buffer to fill. Whatever it writes is used
/// as-is, so only pass functions backed by a secure generator outside of
/// tests.
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(&mut [u8]) -> Result<()>,
{
    FnSource { f }
}
