//! Verdict: a declarative decision-table evaluator
//!
//! Verdict lets callers express branching logic as literal truth tables
//! instead of nested conditionals. A table literal starts with a header row
//! holding the signal values to test, ending with the table's output
//! marker; every following row pairs a condition on those signals with an
//! output value. Evaluation resolves exactly one output or fails.
//!
//! # Core Concepts
//!
//! - **Header row**: the signals to match against, plus the output marker
//! - **Condition rows**: candidate matches, each carrying its output value
//! - **Wildcards**: `cell().any()` matches any signal; `cell().otherwise()`
//!   marks fallback rows consulted only when no ordinary row matches
//! - **Structural equality**: cells compare by value and shape, never by
//!   reference, and a number is never equal to its text form
//!
//! # Example
//!
//! ```rust
//! use verdict::{rows, DecisionTable, Value};
//!
//! let (order, stock) = (100, 50);
//! let table = DecisionTable::new();
//!
//! let outcome = table.eval(&rows![
//!     [order > 0, stock >= order, table.out()],
//!     [true,      true,           "ship"],
//!     [true,      false,          "partial"],
//!     [false,     table.cell().any(), "invalid order"],
//! ]);
//!
//! assert_eq!(outcome, Ok(Value::from("partial")));
//! ```

pub mod builder;
pub mod collection;
pub mod core;
pub mod table;

// Re-export commonly used types
pub use self::core::{CellMarkers, Marker, MarkerRole, Value};
pub use builder::{LiteralBuilder, TableLiteral};
pub use table::{DecisionTable, EvalError};
