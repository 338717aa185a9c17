//! Password composition.
//!
//! Each block is generated in order and split into shuffle units: a
//! sticky block is one unit, a non-sticky block contributes one unit per
//! character. All units are then shuffled together and concatenated, so
//! sticky runs do not sit at a predictable position.

use crate::error::{RandomError, Result};
use crate::generator::Generator;
use crate::source::ByteSource;

use super::block::{validate_blocks, PasswordBlock, PasswordPlan};

impl<S: ByteSource> Generator<S> {
    /// A password of exactly `length` characters built from `blocks`.
    ///
    /// Blocks other than the last draw their length uniformly from
    /// `min_length..=max_length`; an unbounded block draws up to whatever
    /// budget the later blocks leave free. The last block takes all of
    /// the remaining length regardless of its own bounds. The plan is
    /// validated before any randomness is drawn.
    pub fn password(&self, length: usize, blocks: &[PasswordBlock]) -> Result<String> {
        validate_blocks(length, blocks)?;
        log::debug!("password: length={length}, blocks={}", blocks.len());

        let Some(last) = blocks.len().checked_sub(1) else {
            return Ok(String::new());
        };

        // reserved[i]: most characters the blocks after i can take.
        let mut reserved = vec![0usize; blocks.len()];
        for i in (0..last).rev() {
            let after = if i + 1 == last {
                blocks[last].min_length
            } else {
                blocks[i + 1].worst_case()
            };
            reserved[i] = reserved[i + 1].saturating_add(after);
        }

        let mut remaining = length;
        let mut units: Vec<String> = Vec::with_capacity(length);

        for (i, block) in blocks.iter().enumerate() {
            let block_length = if i == last {
                remaining
            } else {
                let budget = remaining.checked_sub(reserved[i]).ok_or_else(|| {
                    RandomError::InvalidBlockPlan(format!("block {i} has no length budget left"))
                })?;
                let upper = block.max_length.map_or(budget, |max| max.min(budget));
                self.range_inclusive(block.min_length, upper)?
            };
            remaining -= block_length;

            if block_length == 0 {
                continue;
            }
            let text = self.string(block_length, &block.alphabet)?;
            log::trace!("block {i}: length={block_length}, sticky={}", block.sticky);
            if block.sticky {
                units.push(text);
            } else {
                units.extend(text.chars().map(String::from));
            }
        }

        self.shuffle(&mut units)?;
        Ok(units.concat())
    }

    /// A password following `plan`.
    pub fn password_plan(&self, plan: &PasswordPlan) -> Result<String> {
        self.password(plan.length, &plan.blocks)
    }
}
