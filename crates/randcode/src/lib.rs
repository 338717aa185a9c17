//! randcode — unbiased random strings from a secure byte source.
//!
//! Maps uniformly distributed random bytes onto caller-chosen alphabets
//! without modulo bias, and builds hex tokens, numeric codes and
//! block-structured passwords on top of that mapping. All randomness
//! comes from an injectable [`ByteSource`]; the default is the
//! operating system's CSPRNG.
//!
//! ```no_run
//! use randcode::{Generator, PasswordBlock, Preset};
//!
//! let generator = Generator::new();
//! let token = generator.alphanumeric(24)?;
//! let code = generator.number(6, true)?;
//! let password = generator.password(
//!     12,
//!     &[
//!         PasswordBlock::new(Preset::Digits).length(2, 4).sticky(true),
//!         PasswordBlock::new(Preset::Letters),
//!     ],
//! )?;
//! # let _ = (token, code, password);
//! # Ok::<(), randcode::RandomError>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod password;
pub mod source;

// Re-export primary types
pub use alphabet::{Alphabet, Preset};
pub use error::{RandomError, Result};
pub use generator::{Generator, DEFAULT_NUMBER_LENGTH, DEFAULT_STRING_LENGTH};
pub use mapper::map_bytes;
pub use password::{PasswordBlock, PasswordPlan};
pub use source::{ByteSource, OsSource, SeededSource};
