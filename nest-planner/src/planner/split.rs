//! Splitting of a primitive form into single-operator operations, by operator priority.

use crate::op::{is_operator, Operator, Tier};
use super::{level::Level, operation::PrimitiveOperation};

/// Returns the offset where the left operand of the operator at `index` starts, by scanning
/// left for the nearest operator of any tier.
fn left_boundary(text: &[u8], index: usize) -> usize {
    (1..index)
        .rev()
        .find(|&i| is_operator(text[i]))
        .map_or(0, |i| i + 1)
}

/// Returns the offset where the right operand of the operator at `index` ends (inclusive), by
/// scanning right for the nearest operator of any tier.
fn right_boundary(text: &[u8], index: usize) -> usize {
    (index + 1..text.len())
        .find(|&i| is_operator(text[i]))
        .map_or(text.len() - 1, |i| i - 1)
}

/// Splits the primitive text of the level into its operations, in evaluation order.
///
/// Each tier is scanned in turn, left to right. When an operand of an operator is an operation
/// that was split out before, the whole operation becomes that operand.
pub fn split_operations(level: &mut Level) {
    level.operations.clear();
    let primitive = level.primitive_text.as_str();
    let text = primitive.as_bytes();

    for tier in Tier::ORDERED {
        // an operator can be neither the first nor the last symbol of its level
        for i in 1..text.len().saturating_sub(1) {
            let Some(operator) = Operator::from_byte(text[i]).filter(|op| op.tier() == tier) else {
                continue;
            };

            let (left, right) = level.adjoining(i);
            let start = left.map_or_else(|| left_boundary(text, i), |operation| operation.start);
            let end = right.map_or_else(|| right_boundary(text, i), |operation| operation.end);

            let sequence_number = level.operations.len();
            level.operations.push(PrimitiveOperation {
                start,
                end,
                operator,
                text: primitive[start..=end].to_string(),
                sequence_number,
            });
        }
    }

    log::debug!(
        "operations of `{}`: {:?}",
        level.primitive_text,
        level.operations.iter().map(|operation| operation.text.as_str()).collect::<Vec<_>>(),
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn split(primitive: &str) -> Vec<String> {
        let mut level = Level::outermost(primitive);
        level.primitive_text = primitive.to_string();
        split_operations(&mut level);
        level.operations.into_iter().map(|operation| operation.text).collect()
    }

    #[test]
    fn single_operator() {
        assert_eq!(split("a>b"), vec!["a>b"]);
    }

    #[test]
    fn multi_character_operands() {
        assert_eq!(split("day off>another day off"), vec!["day off>another day off"]);
    }

    #[test]
    fn chained_in_same_tier() {
        assert_eq!(split("a+b-c"), vec!["a+b", "a+b-c"]);
    }

    #[test]
    fn higher_tier_first() {
        assert_eq!(split("a|b&c+d"), vec!["c+d", "b&c+d", "a|b&c+d"]);
    }

    #[test]
    fn latest_adjoining_operation_wins() {
        assert_eq!(split("a|b&c|d"), vec!["b&c", "a|b&c", "a|b&c|d"]);
    }

    #[test]
    fn primitive_of_default_expression() {
        assert_eq!(split("a+@0|c<@1|@2"), vec![
            "a+@0",
            "c<@1",
            "a+@0|c<@1",
            "a+@0|c<@1|@2",
        ]);
        assert_eq!(split("@0&d=expression!"), vec![
            "d=expression!",
            "@0&d=expression!",
        ]);
    }

    #[test]
    fn sequence_numbers_follow_tiers() {
        let mut level = Level::outermost("a|b&c=d");
        level.primitive_text = level.raw_text.clone();
        split_operations(&mut level);

        let spans = level.operations
            .iter()
            .map(|operation| (operation.sequence_number, operation.span()))
            .collect::<Vec<_>>();
        assert_eq!(spans, vec![(0, 4..=6), (1, 2..=6), (2, 0..=6)]);
    }

    #[test]
    fn operators_are_recorded() {
        let mut level = Level::outermost("a|b&c-d");
        level.primitive_text = level.raw_text.clone();
        split_operations(&mut level);

        let operators = level.operations
            .iter()
            .map(|operation| operation.operator)
            .collect::<Vec<_>>();
        assert_eq!(operators, vec![Operator::Sub, Operator::And, Operator::Or]);
    }

    #[test]
    fn edge_operators_are_ignored() {
        assert_eq!(split("-a"), Vec::<String>::new());
        assert_eq!(split("a|"), Vec::<String>::new());
        assert_eq!(split(""), Vec::<String>::new());
    }

    #[test]
    fn adjacent_operators_give_empty_operands() {
        assert_eq!(split("a+-b"), vec!["a+", "a+-b"]);
    }
}
