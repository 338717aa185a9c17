//! Password blocks and plans.
//!
//! A plan is an ordered list of blocks plus a total length. Every block
//! but the last draws its length from its own range; the last block fills
//! up whatever is left. Plans are checked up front by [`validate_blocks`],
//! so an impossible plan fails before any random byte is drawn.

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Preset};
use crate::error::{RandomError, Result};

/// One segment of a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct PasswordBlock {
    /// Symbols this block draws from.
    pub alphabet: Alphabet,
    /// Minimum number of characters.
    pub min_length: usize,
    /// Maximum number of characters; `None` means the remaining budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Keep the block's characters together when the password is shuffled.
    pub sticky: bool,
}

impl PasswordBlock {
    /// A non-sticky block with no length constraints.
    pub fn new(alphabet: impl Into<Alphabet>) -> Self {
        Self {
            alphabet: alphabet.into(),
            min_length: 0,
            max_length: None,
            sticky: false,
        }
    }

    /// Set both length bounds (inclusive).
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = Some(max);
        self
    }

    /// Set the minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Set the maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Mark the block as sticky (or not).
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// The most characters this block can take when it is not the last one.
    pub(crate) fn worst_case(&self) -> usize {
        self.max_length.unwrap_or(self.min_length)
    }
}

/// Wire form of a block: either `alphabet` (a preset name or raw text)
/// or `preset` (a name).
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBlock {
    #[serde(default)]
    alphabet: Option<String>,
    #[serde(default)]
    preset: Option<Preset>,
    #[serde(default)]
    min_length: usize,
    #[serde(default)]
    max_length: Option<usize>,
    #[serde(default)]
    sticky: bool,
}

impl TryFrom<RawBlock> for PasswordBlock {
    type Error = String;

    fn try_from(raw: RawBlock) -> std::result::Result<Self, Self::Error> {
        let alphabet = match (raw.alphabet, raw.preset) {
            (Some(text), None) => alphabet_from_text(&text).map_err(|e| e.to_string())?,
            (None, Some(preset)) => preset.alphabet(),
            (Some(_), Some(_)) => {
                return Err("a block takes either `alphabet` or `preset`, not both".into())
            }
            (None, None) => return Err("a block needs an `alphabet` or a `preset`".into()),
        };
        Ok(Self {
            alphabet,
            min_length: raw.min_length,
            max_length: raw.max_length,
            sticky: raw.sticky,
        })
    }
}

/// Resolve an `alphabet` field: a preset name wins, anything else is raw text.
fn alphabet_from_text(text: &str) -> Result<Alphabet> {
    match text.parse::<Preset>() {
        Ok(preset) => Ok(preset.alphabet()),
        Err(_) => Alphabet::new(text),
    }
}

/// A total password length plus the blocks that fill it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPlan {
    pub length: usize,
    pub blocks: Vec<PasswordBlock>,
}

impl PasswordPlan {
    /// An empty plan for a password of `length` characters.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            blocks: Vec::new(),
        }
    }

    /// Append a block.
    pub fn block(mut self, block: PasswordBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Check that the blocks can always produce exactly `length` characters.
    pub fn validate(&self) -> Result<()> {
        validate_blocks(self.length, &self.blocks)
    }

    /// Parse and validate a plan from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: Self = serde_json::from_str(json)
            .map_err(|e| RandomError::SerializationError(e.to_string()))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Serialize the plan to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RandomError::SerializationError(e.to_string()))
    }
}

/// Check a block list against a total length.
///
/// Fails with [`RandomError::InvalidBlockPlan`] when:
/// - a block has `min_length > max_length`
/// - the minimum lengths of all blocks (the last one included) exceed `length`
/// - the non-last blocks at their maximum, plus the last block's minimum,
///   could exceed `length` (an unbounded block counts with its minimum)
/// - there are no blocks but `length > 0`
///
/// A plan that passes can never over-allocate: the last block always
/// receives at least its minimum.
pub fn validate_blocks(length: usize, blocks: &[PasswordBlock]) -> Result<()> {
    let Some((last, init)) = blocks.split_last() else {
        if length > 0 {
            return Err(RandomError::InvalidBlockPlan(format!(
                "no blocks to fill {length} characters"
            )));
        }
        return Ok(());
    };

    for (i, block) in blocks.iter().enumerate() {
        if let Some(max) = block.max_length {
            if block.min_length > max {
                return Err(RandomError::InvalidBlockPlan(format!(
                    "block {i}: min_length {} exceeds max_length {max}",
                    block.min_length
                )));
            }
        }
    }

    let min_total = blocks
        .iter()
        .map(|b| b.min_length)
        .fold(0usize, usize::saturating_add);
    if min_total > length {
        return Err(RandomError::InvalidBlockPlan(format!(
            "block minimum lengths add up to {min_total}, more than the total length {length}"
        )));
    }

    let worst_total = init
        .iter()
        .map(PasswordBlock::worst_case)
        .fold(last.min_length, usize::saturating_add);
    if worst_total > length {
        return Err(RandomError::InvalidBlockPlan(format!(
            "blocks may take up to {worst_total} characters, more than the total length {length}"
        )));
    }

    Ok(())
}
