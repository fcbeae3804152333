use std::{cmp::Ordering, ops::Range};
use super::operation::PrimitiveOperation;

/// A stage of expression evaluation: either the whole expression, or one parenthesized
/// sub-expression of it.
///
/// A sub-expression must be evaluated before the expression that surrounds it, so it is said to
/// be evaluated on a higher level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Offset of the first byte of this level in the source.
    pub start: usize,

    /// For the outermost level, the length of the source. For every other level, the offset of
    /// its closing parenthesis.
    ///
    /// Use [`Level::span`] for a range that does not depend on which kind of level this is.
    pub end: usize,

    /// Nesting depth of this level. The outermost level has height `0`.
    pub height: usize,

    /// The text of this level as it appears in the source, including its parentheses.
    pub raw_text: String,

    /// The raw text with every directly nested level replaced by an alias, and all parentheses
    /// removed.
    pub primitive_text: String,

    /// Indices of the directly nested levels in the [`Plan`](super::Plan) that owns this
    /// level. The alias `@n` refers to the level at `nested[n]`.
    pub nested: Vec<usize>,

    /// The single-operator operations of the primitive text, in evaluation order.
    pub operations: Vec<PrimitiveOperation>,
}

impl Level {
    /// Creates the outermost level, spanning the entire source.
    pub fn outermost(source: &str) -> Self {
        Self {
            start: 0,
            end: source.len(),
            height: 0,
            raw_text: source.to_string(),
            primitive_text: String::new(),
            nested: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Creates a level opened by the parenthesis at `start`. It is completed by
    /// [`Level::close`].
    pub fn open(start: usize, height: usize) -> Self {
        Self {
            start,
            end: start,
            height,
            raw_text: String::new(),
            primitive_text: String::new(),
            nested: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Completes a level with the closing parenthesis at `end`.
    pub fn close(&mut self, end: usize, source: &str) {
        self.end = end;
        self.raw_text = source[self.start..=end].to_string();
    }

    /// Returns the region of the source that this level covers.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.raw_text.len()
    }

    /// Orders levels so that deeper levels come first, and levels of equal height come in source
    /// order.
    pub fn depth_first(&self, other: &Self) -> Ordering {
        other.height.cmp(&self.height).then(self.start.cmp(&other.start))
    }

    /// Returns true if `other` lies inside this level.
    ///
    /// Only deeper levels can be nested; `other` must have a greater height than `self`.
    pub fn contains(&self, other: &Self) -> bool {
        debug_assert!(
            other.height > self.height,
            "lower or with equal height level cannot be nested",
        );
        other.start >= self.start && other.end < self.end
    }

    /// Returns the most recently recorded operations that end right before, and start right
    /// after, the operator at `index` of the primitive text.
    pub fn adjoining(&self, index: usize) -> (Option<&PrimitiveOperation>, Option<&PrimitiveOperation>) {
        let left = self.operations
            .iter()
            .rev()
            .find(|operation| operation.end + 1 == index);
        let right = self.operations
            .iter()
            .rev()
            .find(|operation| operation.start == index + 1);
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::op::Operator;
    use super::*;

    const SOURCE: &str = "(a+(b>c))&d";

    fn level(start: usize, end: usize, height: usize) -> Level {
        let mut level = Level::open(start, height);
        level.close(end, SOURCE);
        level
    }

    #[test]
    fn outermost_span() {
        let outer = Level::outermost(SOURCE);
        assert_eq!(outer.end, SOURCE.len());
        assert_eq!(outer.span(), 0..SOURCE.len());
    }

    #[test]
    fn nested_span_includes_parens() {
        let inner = level(3, 7, 2);
        assert_eq!(inner.raw_text, "(b>c)");
        assert_eq!(inner.span(), 3..8);
    }

    #[test]
    fn containment() {
        let outer = Level::outermost(SOURCE);
        let middle = level(0, 8, 1);
        let inner = level(3, 7, 2);

        assert!(outer.contains(&middle));
        assert!(outer.contains(&inner));
        assert!(middle.contains(&inner));
    }

    #[test]
    fn sibling_not_contained() {
        let source = "(a)+(b)";
        let mut left = Level::open(0, 1);
        left.close(2, source);
        let mut right = Level::open(4, 2);
        right.close(6, source);

        assert!(!left.contains(&right));
    }

    #[test]
    #[should_panic(expected = "cannot be nested")]
    fn containment_rejects_equal_height() {
        let left = level(0, 8, 1);
        let right = level(3, 7, 1);
        left.contains(&right);
    }

    #[test]
    fn depth_first_ordering() {
        let mut levels = vec![Level::outermost(SOURCE), level(0, 8, 1), level(3, 7, 2)];
        levels.sort_by(Level::depth_first);

        let heights = levels.iter().map(|level| level.height).collect::<Vec<_>>();
        assert_eq!(heights, vec![2, 1, 0]);
    }

    #[test]
    fn adjoining_prefers_latest() {
        let mut level = Level::outermost("a|b&c|d");
        level.operations.push(PrimitiveOperation { start: 2, end: 4, operator: Operator::And, text: "b&c".to_string(), sequence_number: 0 });
        level.operations.push(PrimitiveOperation { start: 0, end: 4, operator: Operator::Or, text: "a|b&c".to_string(), sequence_number: 1 });

        let (left, right) = level.adjoining(5);
        assert_eq!(left.map(|op| op.text.as_str()), Some("a|b&c"));
        assert_eq!(right, None);
    }
}
