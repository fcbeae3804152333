use crate::op::Operator;
use std::ops::RangeInclusive;

/// A single-operator fragment of a level's primitive form, such as `a+@0`.
///
/// The operands may be aliases of nested levels, or the full text of an operation that was split
/// out earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveOperation {
    /// Offset of the first byte of the operation in the owning level's primitive text.
    pub start: usize,

    /// Offset of the last byte of the operation in the owning level's primitive text
    /// (inclusive).
    pub end: usize,

    /// The operator applied by this operation.
    pub operator: Operator,

    /// The text of the operation, taken from the owning level's primitive text.
    pub text: String,

    /// Position of this operation in the evaluation order of its level.
    pub sequence_number: usize,
}

impl PrimitiveOperation {
    /// Returns the region of the owning level's primitive text that this operation covers.
    pub fn span(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}
