//! Block-structured passwords.
//!
//! This module provides:
//! - [`PasswordBlock`] and [`PasswordPlan`], the serde-friendly plan types
//! - plan validation ([`validate_blocks`])
//! - composition via [`crate::Generator::password`]

pub mod block;
pub mod compose;

pub use block::{validate_blocks, PasswordBlock, PasswordPlan};
