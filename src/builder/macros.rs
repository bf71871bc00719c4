//! Macros for declaring tables with minimal boilerplate.

/// Build a sealed table literal from bracketed rows of cell expressions.
///
/// The first row is the header — the signal values to match against, ending
/// with the table's output marker. Every following row is one condition.
/// Cells accept anything convertible into [`Value`](crate::Value).
///
/// # Example
///
/// ```
/// use verdict::{rows, DecisionTable, Value};
///
/// let table = DecisionTable::new();
/// let literal = rows![
///     [true, false, table.out()],
///     [true, true, "both"],
///     [true, false, "first only"],
///     [false, table.cell().any(), "no first"],
/// ];
///
/// assert_eq!(table.eval(&literal), Ok(Value::from("first only")));
/// ```
#[macro_export]
macro_rules! rows {
    ( $( [ $( $cell:expr ),+ $(,)? ] ),+ $(,)? ) => {{
        let mut literal = $crate::builder::LiteralBuilder::new().fragment("| ");
        $(
            $(
                literal = literal.value($cell).fragment(" | ");
            )+
        )+
        literal.finish()
    }};
}
