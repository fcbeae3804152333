use ariadne::{Fmt, Label, Report, ReportKind};
use nest_error::{ErrorKind, EXPR};
use std::{any::Any, fmt, ops::Range};

/// Builds a report with one label per span, in order.
fn build<'a, L: ToString>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: impl IntoIterator<Item = L>,
    help: Option<String>,
) -> Report<'static, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            labels
                .into_iter()
                .zip(spans)
                .map(|(label, span)| {
                    Label::new((src_id, span.clone()))
                        .with_color(EXPR)
                        .with_message(label)
                })
                .collect::<Vec<_>>(),
        );

    if let Some(help) = help {
        builder.set_help(help);
    }

    builder.finish()
}

/// The parentheses of the expression do not pair up.
#[derive(Debug, Clone, PartialEq)]
pub struct UnbalancedParentheses {
    /// Whether the offending parenthesis was an opening parenthesis `(` with no closing one.
    /// Otherwise, it was a closing parenthesis `)` with no opening one.
    pub opening: bool,
}

impl fmt::Display for UnbalancedParentheses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opening {
            write!(f, "unbalanced parentheses: opening brace with no closing one")
        } else {
            write!(f, "unbalanced parentheses: closing brace with no opening one")
        }
    }
}

impl ErrorKind for UnbalancedParentheses {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let (label, help) = if self.opening {
            ("this parenthesis is never closed", "add a closing parenthesis `)` somewhere after this")
        } else {
            ("this parenthesis closes nothing", "add an opening parenthesis `(` somewhere before this")
        };
        build(src_id, spans, "unbalanced parentheses", [label], Some(help.to_string()))
    }
}

/// The input contains the alias marker `@`, which is reserved for naming nested levels.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservedMarker;

impl fmt::Display for ReservedMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the `@` character is reserved and cannot appear in an expression")
    }
}

impl ErrorKind for ReservedMarker {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "reserved character in expression",
            ["`@` found here"],
            Some(format!("`@` names nested {}; rename this operand", "sub-expressions".fg(EXPR))),
        )
    }
}

/// An alias in a primitive operation refers to a nested level that does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedAlias {
    /// The alias as it appeared in the operation, such as `@3`.
    pub alias: String,

    /// The number of nested levels that were available.
    pub available: usize,
}

impl fmt::Display for UnresolvedAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alias `{}` does not name a nested level ({} available)", self.alias, self.available)
    }
}

impl ErrorKind for UnresolvedAlias {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            format!("unresolved alias `{}`", self.alias),
            [format!("the level here only has {} nested levels", self.available)],
            Some(format!(
                "a parenthesized {} may be followed directly by a digit; add an operator between them",
                "sub-expression".fg(EXPR),
            )),
        )
    }
}
