//! Evaluation errors.

use thiserror::Error;

/// Errors raised while evaluating a decision table.
///
/// Every variant is terminal: evaluation stops at the first failed check,
/// nothing is retried, and no error is downgraded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Literal not assembled through the builder. Use rows! or LiteralBuilder and finish()")]
    MalformedLiteral,

    #[error("Output column not defined. End the header with the table's out marker")]
    MissingOutput,

    #[error("Multiple output columns defined. Use the out marker exactly once")]
    DuplicatedOutput,

    #[error("Column count not matched. Every row needs as many cells as the header")]
    ColumnCountMismatch,

    #[error("Duplicated conditions defined. At most one row may match the signals")]
    DuplicatedCondition,

    #[error("No condition covers the given signals. Add a matching row or an otherwise row")]
    UncoveredCondition,
}
