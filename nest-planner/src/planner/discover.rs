//! Discovery of the parenthesized levels of an expression.

use crate::tokenizer::{tokenize_complete, TokenKind};
use super::{
    error::{kind::{ReservedMarker, UnbalancedParentheses}, Error},
    level::Level,
};

/// Finds every level of the source: the outermost level, plus one level per pair of
/// parentheses.
///
/// The levels are returned deepest first, and in source order among levels of equal height, so
/// that every level appears after all of the levels nested inside it.
pub fn discover_levels(source: &str) -> Result<Vec<Level>, Error> {
    let mut levels = vec![Level::outermost(source)];

    // indices into `levels` of the levels that are still open, innermost last
    let mut open = Vec::new();

    for token in tokenize_complete(source).iter() {
        match token.kind {
            TokenKind::OpenParen => {
                let height = open.len() + 1;
                open.push(levels.len());
                levels.push(Level::open(token.span.start, height));
            },
            TokenKind::CloseParen => {
                let Some(idx) = open.pop() else {
                    return Err(Error::new(
                        vec![token.span.clone()],
                        UnbalancedParentheses { opening: false },
                    ));
                };
                levels[idx].close(token.span.start, source);
            },
            kind if kind.is_marker() => {
                let start = token.span.start;
                return Err(Error::new(vec![start..start + 1], ReservedMarker));
            },
            _ => (),
        }
    }

    if let Some(&idx) = open.last() {
        let start = levels[idx].start;
        return Err(Error::new(
            vec![start..start + 1],
            UnbalancedParentheses { opening: true },
        ));
    }

    levels.sort_by(Level::depth_first);

    log::debug!("discovered {} levels in `{}`", levels.len(), source);
    for level in &levels {
        log::trace!("  height {}: `{}`", level.height, level.raw_text);
    }

    Ok(levels)
}
