//! Back-substitution of aliases with the text of the levels they name.

use crate::tokenizer::{tokenize_complete, TokenKind};
use super::{
    error::{kind::UnresolvedAlias, Error},
    level::Level,
};
use std::ops::Range;

/// An alias found in the text of an operation.
struct Alias {
    span: Range<usize>,
    lexeme: String,
    index: Option<usize>,
}

/// Returns the first alias in the text.
fn first_alias(text: &str) -> Option<Alias> {
    tokenize_complete(text)
        .iter()
        .find(|token| token.kind == TokenKind::Alias)
        .map(|token| Alias {
            span: token.span.clone(),
            lexeme: token.lexeme.to_string(),
            index: token.alias_index(),
        })
}

/// Replaces every alias in the given text with the raw text of the nested level it names.
///
/// `levels` is the arena that [`Level::nested`] indexes into.
pub fn expand_aliases(text: &str, level: &Level, levels: &[Level]) -> Result<String, Error> {
    let mut expression = text.to_string();

    while let Some(alias) = first_alias(&expression) {
        let sub_level = alias.index
            .and_then(|index| level.nested.get(index))
            .and_then(|&idx| levels.get(idx))
            .ok_or_else(|| Error::new(vec![level.span()], UnresolvedAlias {
                alias: alias.lexeme.clone(),
                available: level.nested.len(),
            }))?;

        expression.replace_range(alias.span, &sub_level.raw_text);
    }

    Ok(expression)
}

/// Returns the operations of the level, in evaluation order, with every alias replaced by the
/// raw text of the nested level it names.
pub fn instantiate(level: &Level, levels: &[Level]) -> Result<Vec<String>, Error> {
    level.operations
        .iter()
        .map(|operation| expand_aliases(&operation.text, level, levels))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::planner::{discover::discover_levels, primitive::construct_primitives, split::split_operations};
    use super::*;

    fn prepared(source: &str) -> Vec<Level> {
        let mut levels = discover_levels(source).unwrap();
        construct_primitives(&mut levels);
        levels.iter_mut().for_each(split_operations);
        levels
    }

    #[test]
    fn aliases_become_bracketed_text() {
        let levels = prepared("(a+(b>c)|c<(day off>another day off)|(150>879))&d=expression!");
        assert_eq!(instantiate(&levels[3], &levels).unwrap(), vec![
            "a+(b>c)",
            "c<(day off>another day off)",
            "a+(b>c)|c<(day off>another day off)",
            "a+(b>c)|c<(day off>another day off)|(150>879)",
        ]);
    }

    #[test]
    fn nested_text_is_not_expanded_further() {
        let levels = prepared("((a|b)&c)=d");
        let outermost = levels.last().unwrap();
        assert_eq!(instantiate(outermost, &levels).unwrap(), vec!["((a|b)&c)=d"]);
    }

    #[test]
    fn multi_digit_aliases() {
        let source = "(a)+(b)+(c)+(d)+(e)+(f)+(g)+(h)+(i)+(j)+(k)+(l)";
        let levels = prepared(source);
        let outermost = levels.last().unwrap();
        assert_eq!(outermost.nested.len(), 12);

        let expanded = expand_aliases("@11+@10", outermost, &levels).unwrap();
        assert_eq!(expanded, "(l)+(k)");
    }

    #[test]
    fn every_alias_in_one_operation() {
        let levels = prepared("(x)-(y)");
        let outermost = levels.last().unwrap();
        assert_eq!(instantiate(outermost, &levels).unwrap(), vec!["(x)-(y)"]);
    }

    #[test]
    fn unknown_alias() {
        let levels = prepared("(x)-y");
        let outermost = levels.last().unwrap();
        let err = expand_aliases("@4-y", outermost, &levels).unwrap_err();
        assert_eq!(
            err.downcast_kind::<UnresolvedAlias>(),
            Some(&UnresolvedAlias { alias: "@4".to_string(), available: 1 }),
        );
        assert_eq!(err.spans, vec![0..5]);
    }
}
