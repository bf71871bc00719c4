//! Table literals and their builder.
//!
//! A table literal is the two-part invocation payload the evaluator
//! consumes: the ordered static text fragments of the table and the ordered
//! dynamic cell values interleaved between them, with exactly one more
//! fragment than values. The fragment text itself is decoration (column
//! separators, captions); only the interleaving shape and the values carry
//! meaning.

use crate::core::Value;
use serde::{Deserialize, Serialize};

/// An assembled, possibly sealed table literal.
///
/// Literals are plain data and serialize like any other value, so the
/// evaluator re-validates the shape on every call rather than trusting the
/// origin: a literal is accepted only if it is sealed, carries at least one
/// fragment with a verbatim companion of equal length, and holds exactly
/// one more fragment than values. [`LiteralBuilder`] and the
/// [`rows!`](crate::rows) macro produce that shape by construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableLiteral {
    fragments: Vec<String>,
    raw: Vec<String>,
    values: Vec<Value>,
    sealed: bool,
}

impl TableLiteral {
    /// Assemble a literal from pre-collected parts.
    ///
    /// The verbatim fragments mirror the cooked ones, and the result is not
    /// sealed: evaluation rejects it until [`seal`](Self::seal) is called.
    pub fn from_parts(fragments: Vec<String>, values: Vec<Value>) -> Self {
        let raw = fragments.clone();
        TableLiteral {
            fragments,
            raw,
            values,
            sealed: false,
        }
    }

    /// Freeze the literal against further mutation.
    pub fn seal(mut self) -> Self {
        self.sealed = true;
        self
    }

    /// The static text fragments, in declared order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The dynamic cell values, in declared order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Whether this literal holds the sealed interleaved shape the
    /// evaluator requires.
    pub(crate) fn is_well_formed(&self) -> bool {
        !self.fragments.is_empty()
            && self.raw.len() == self.fragments.len()
            && self.sealed
            && self.values.len() + 1 == self.fragments.len()
    }
}

/// Fluent builder interleaving static fragments and cell values.
///
/// # Example
///
/// ```rust
/// use verdict::{DecisionTable, LiteralBuilder, Value};
///
/// let table = DecisionTable::new();
/// let literal = LiteralBuilder::new()
///     .fragment("| ")
///     .value(true)
///     .fragment(" | ")
///     .value(table.out())
///     .fragment(" |\n| ")
///     .value(true)
///     .fragment(" | ")
///     .value("matched")
///     .fragment(" |")
///     .finish();
///
/// assert_eq!(table.eval(&literal), Ok(Value::from("matched")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LiteralBuilder {
    fragments: Vec<String>,
    raw: Vec<String>,
    values: Vec<Value>,
}

impl LiteralBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a static text fragment.
    pub fn fragment(mut self, text: &str) -> Self {
        self.fragments.push(text.to_string());
        self.raw.push(text.to_string());
        self
    }

    /// Append a dynamic cell value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Seal the accumulated parts into a literal.
    pub fn finish(self) -> TableLiteral {
        TableLiteral {
            fragments: self.fragments,
            raw: self.raw,
            values: self.values,
            sealed: true,
        }
    }
}
