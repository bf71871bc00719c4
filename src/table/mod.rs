//! The decision table and its evaluation engine.

mod error;
mod grid;

pub use error::EvalError;

use crate::builder::TableLiteral;
use crate::core::marker::{CellMarkers, Marker, MarkerSet};
use crate::core::matching::{has_duplicate_rows_except, match_row, split_otherwise};
use crate::core::Value;
use grid::Grid;

/// A declarative decision table.
///
/// Construction allocates the table's marker tokens; evaluation matches a
/// literal's header signals against its condition rows and resolves exactly
/// one output value.
///
/// Markers are scoped to the instance that created them: a marker obtained
/// from one table is ordinary data to every other table. The instance holds
/// no other state, so one table can evaluate any number of literals, from
/// any number of threads.
///
/// # Example
///
/// ```rust
/// use verdict::{rows, DecisionTable, Value};
///
/// let stock = 3;
/// let table = DecisionTable::new();
/// let result = table.eval(&rows![
///     [stock > 0, table.out()],
///     [true, "in stock"],
///     [false, "sold out"],
/// ]);
///
/// assert_eq!(result, Ok(Value::from("in stock")));
/// ```
#[derive(Debug)]
pub struct DecisionTable {
    markers: MarkerSet,
}

impl DecisionTable {
    /// Create a table with a fresh set of marker tokens.
    pub fn new() -> Self {
        DecisionTable {
            markers: MarkerSet::new(),
        }
    }

    /// The marker that designates the output column.
    ///
    /// It must appear exactly once, as the last cell of the header row; the
    /// cell beneath it in each condition row holds that row's output.
    pub fn out(&self) -> Marker {
        self.markers.out
    }

    /// The wildcard markers usable in condition cells.
    pub fn cell(&self) -> &CellMarkers {
        &self.markers.cell
    }

    /// Evaluate a table literal and resolve its single output.
    ///
    /// The literal's first row is the header: the signal values to match,
    /// ending with [`out`](Self::out). Each following row pairs a condition
    /// on those signals with an output value. A condition cell matches its
    /// signal by structural equality, or unconditionally when it is a
    /// wildcard.
    ///
    /// Rows carrying an `otherwise` cell form a fallback group that is only
    /// consulted when no ordinary row matches. In either group, exactly one
    /// row must match: none is [`EvalError::UncoveredCondition`], several
    /// is [`EvalError::DuplicatedCondition`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{rows, DecisionTable, Value};
    ///
    /// let (role, owner) = ("editor", false);
    /// let table = DecisionTable::new();
    /// let access = table.eval(&rows![
    ///     [role, owner, table.out()],
    ///     ["admin", table.cell().any(), "read-write"],
    ///     ["editor", true, "read-write"],
    ///     ["editor", false, "read"],
    ///     [table.cell().otherwise(), table.cell().otherwise(), "none"],
    /// ]);
    ///
    /// assert_eq!(access, Ok(Value::from("read")));
    /// ```
    pub fn eval(&self, literal: &TableLiteral) -> Result<Value, EvalError> {
        if !literal.is_well_formed() {
            return Err(EvalError::MalformedLiteral);
        }

        let Grid {
            header,
            rows,
            output_index,
        } = grid::parse(literal.values(), &self.markers)?;

        if has_duplicate_rows_except(&rows, output_index) {
            return Err(EvalError::DuplicatedCondition);
        }

        let undefined = Value::Marker(self.markers.undefined);
        let (normal, fallback) = split_otherwise(rows, &self.markers);

        // Ordinary rows win outright; otherwise rows are consulted only
        // when no ordinary row matched.
        for phase in [normal, fallback] {
            let mut matched: Vec<Value> = phase
                .iter()
                .map(|row| match_row(&header, row, &self.markers))
                .filter(|output| *output != undefined)
                .collect();

            if matched.len() > 1 {
                return Err(EvalError::DuplicatedCondition);
            }
            if let Some(output) = matched.pop() {
                return Ok(output);
            }
        }

        Err(EvalError::UncoveredCondition)
    }
}

impl Default for DecisionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows;

    #[test]
    fn resolves_the_unique_matching_row() {
        let (a, b) = (true, false);
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [a, b, table.out()],
            [true, true, 1],
            [true, false, 2],
            [false, true, 3],
            [false, false, 4],
        ]);

        assert_eq!(result, Ok(Value::from(2)));
    }

    #[test]
    fn nested_containers_match_structurally() {
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [[0, 0], [1, 1], table.out()],
            [[0, 0], [1, 1], 1],
        ]);

        assert_eq!(result, Ok(Value::from(1)));
    }

    #[test]
    fn ambiguous_wildcard_match_is_rejected() {
        let (a, b) = (true, false);
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [a, b, table.out()],
            [true, true, 0],
            [true, false, 1],
            [true, table.cell().any(), 2],
        ]);

        assert_eq!(result, Err(EvalError::DuplicatedCondition));
    }

    #[test]
    fn otherwise_rows_yield_to_ordinary_rows() {
        let (a, b) = (true, false);
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [a, b, table.out()],
            [true, table.cell().any(), 0],
            [false, false, 1],
            [true, table.cell().otherwise(), 2],
        ]);

        assert_eq!(result, Ok(Value::from(0)));
    }

    #[test]
    fn ambiguity_between_otherwise_rows_is_rejected() {
        let (a, b) = (true, false);
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [a, b, table.out()],
            [true, true, 0],
            [false, false, 1],
            [true, table.cell().otherwise(), 2],
            [table.cell().otherwise(), false, 3],
        ]);

        assert_eq!(result, Err(EvalError::DuplicatedCondition));
    }

    #[test]
    fn uncovered_signals_are_rejected() {
        let (a, b) = (true, false);
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [a, b, table.out()],
            [true, true, 1],
            [false, true, 3],
            [false, false, 4],
        ]);

        assert_eq!(result, Err(EvalError::UncoveredCondition));
    }

    #[test]
    fn duplicate_rows_are_rejected_before_matching() {
        let table = DecisionTable::new();

        // Neither duplicate could ever match the signals; the duplication
        // itself is the defect, and the output column does not
        // disambiguate.
        let result = table.eval(&rows![
            [true, false, table.out()],
            [false, true, 0],
            [false, true, 9],
        ]);

        assert_eq!(result, Err(EvalError::DuplicatedCondition));
    }

    #[test]
    fn numeric_signal_does_not_match_its_text() {
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            ["0", table.out()],
            [0, "matched zero"],
        ]);

        assert_eq!(result, Err(EvalError::UncoveredCondition));
    }

    #[test]
    fn unsealed_literal_is_rejected() {
        let table = DecisionTable::new();
        let literal = TableLiteral::from_parts(
            vec!["|".into(), "|".into()],
            vec![Value::from(true)],
        );

        assert_eq!(table.eval(&literal), Err(EvalError::MalformedLiteral));
    }

    #[test]
    fn null_is_not_an_output_marker() {
        let table = DecisionTable::new();

        let result = table.eval(&rows![
            [true, false, Value::Null],
            [true, true, 1],
            [true, false, 2],
        ]);

        assert_eq!(result, Err(EvalError::MissingOutput));
    }

    #[test]
    fn header_only_tables_cover_nothing() {
        let table = DecisionTable::new();

        let result = table.eval(&rows![[true, table.out()]]);

        assert_eq!(result, Err(EvalError::UncoveredCondition));
    }
}
