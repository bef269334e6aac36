//! Text to [`Range`](crate::models::Range) conversion.
//!
//! - `shape` - ordered classification of a token into one of the accepted forms
//! - `parse` - the public parse entry points

mod parse;
mod shape;

// Re-export public functions
pub use parse::{parse_range, parse_ranges};
pub use shape::{classify, Shape};
