//! Decomposition of nested, prioritized infix expressions into an ordered plan of
//! single-operator steps.
//!
//! ```
//! use nest_planner::Planner;
//!
//! let plan = Planner::new("(a+b)&c").plan().unwrap();
//! assert_eq!(plan.steps(), &["a+b", "(a+b)&c"]);
//! ```

pub mod op;
pub mod planner;
pub mod tokenizer;

pub use planner::{error::Error, level::Level, operation::PrimitiveOperation, Plan, Planner};
