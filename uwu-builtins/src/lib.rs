//! The example programs' library functions over ordinary Rust types.
//!
//! Sum types are Rust's own `Option`, tuples and [`ListView`](uwu_value::ListView),
//! so every match in here is checked for exhaustiveness at compile time.

#[cfg(test)]
mod test;

pub mod array;
pub mod function;
pub mod option;
pub mod sort;
