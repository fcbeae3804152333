//! Construction of the primitive form of each level.
//!
//! A nested level could in principle be evaluated first and its value substituted into the
//! surrounding expression. To get rid of the parentheses of the surrounding level, each directly
//! nested level is replaced by an alias: the marker `@` followed by its index in
//! [`Level::nested`].

use crate::tokenizer::token::ALIAS_MARKER;
use super::level::Level;

/// Returns the alias naming the nested level at the given index.
pub fn alias(index: usize) -> String {
    format!("{}{}", ALIAS_MARKER, index)
}

/// Builds the primitive text and nested level list of every level.
///
/// `levels` must be ordered deepest first, as returned by
/// [`discover_levels`](super::discover::discover_levels).
pub fn construct_primitives(levels: &mut [Level]) {
    for level in levels.iter_mut() {
        level.primitive_text = level.raw_text.clone();
    }

    let max_height = levels.first().map_or(0, |level| level.height);
    for height in (0..max_height).rev() {
        for i in 0..levels.len() {
            if levels[i].height != height {
                continue;
            }

            // every level one height deeper comes before this one
            let (finished, rest) = levels.split_at_mut(i);
            let level = &mut rest[0];
            for (j, sub_level) in finished.iter().enumerate() {
                if sub_level.height == height + 1 && level.contains(sub_level) {
                    let alias = alias(level.nested.len());
                    level.primitive_text = level.primitive_text.replacen(&sub_level.raw_text, &alias, 1);
                    level.nested.push(j);
                }
            }
        }
    }

    for level in levels.iter_mut() {
        level.primitive_text.retain(|c| c != '(' && c != ')');
        log::debug!("primitive form of `{}`: `{}`", level.raw_text, level.primitive_text);
    }
}
