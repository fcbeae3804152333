pub mod discover;
pub mod error;
pub mod level;
pub mod operation;
pub mod primitive;
pub mod split;
pub mod substitute;

use error::Error;
use level::Level;

/// Plans the evaluation of an expression made of nested, parenthesized sub-expressions joined
/// by infix operators.
///
/// The planner does not evaluate anything. It produces a [`Plan`]: the order in which the
/// single-operator sub-expressions must be handed to an evaluator so that both parentheses and
/// operator priorities are respected.
#[derive(Debug, Clone)]
pub struct Planner<'source> {
    /// The expression to plan.
    source: &'source str,
}

impl<'source> Planner<'source> {
    /// Create a new planner for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Decomposes the source into its plan.
    ///
    /// Fails if the parentheses of the source do not pair up, or if the source contains the
    /// reserved alias marker `@`. Rejecting `@` is stricter than the reference tool, which
    /// accepts it and may then misread it as an alias. Nothing else about the expression is
    /// validated; malformed operator sequences produce operations with empty operands.
    pub fn plan(&self) -> Result<Plan, Error> {
        let mut levels = discover::discover_levels(self.source)?;
        primitive::construct_primitives(&mut levels);
        levels.iter_mut().for_each(split::split_operations);

        let mut steps = Vec::new();
        for level in &levels {
            steps.extend(substitute::instantiate(level, &levels)?);
        }

        log::debug!("planned {} steps for `{}`", steps.len(), self.source);
        Ok(Plan { levels, steps })
    }
}

/// The decomposition of an expression into single-operator steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Every level of the expression, deepest first.
    levels: Vec<Level>,

    /// The operations of every level with aliases expanded, in evaluation order.
    steps: Vec<String>,
}

impl Plan {
    /// Returns every level of the expression, deepest first, and in source order among levels
    /// of the same height. The last level is the outermost one.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the levels directly nested in the given level, in alias order.
    pub fn nested<'a>(&'a self, level: &'a Level) -> impl Iterator<Item = &'a Level> + 'a {
        level.nested.iter().filter_map(|&idx| self.levels.get(idx))
    }

    /// Returns the steps of the plan, in evaluation order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Consumes the plan, returning its steps.
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}
