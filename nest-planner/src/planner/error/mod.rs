pub mod kind;

pub use nest_error::{Error, ErrorKind};
