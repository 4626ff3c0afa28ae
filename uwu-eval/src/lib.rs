//! The example programs' library functions over dynamic [`Value`](uwu_value::Value)s.
//!
//! Every deconstruction goes through the runtime matcher, so a value of an
//! unexpected shape surfaces as a [`NonExhaustiveMatch`] naming the function
//! that could not handle it.


pub mod array;
pub mod operator;
pub mod option;
pub mod sort;

pub use operator::Operator;
pub use uwu_match::NonExhaustiveMatch;
