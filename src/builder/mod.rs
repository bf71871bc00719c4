//! Builder API for assembling table literals.
//!
//! This module provides the invocation surface of the evaluator: a fluent
//! [`LiteralBuilder`] that interleaves static text fragments with cell
//! values, and the [`rows!`](crate::rows) macro that lays a whole table out
//! at once. The evaluator only accepts literals carrying the sealed
//! interleaved shape these produce; anything hand-assembled is re-checked
//! at evaluation time.

pub mod literal;
pub mod macros;

pub use literal::{LiteralBuilder, TableLiteral};
