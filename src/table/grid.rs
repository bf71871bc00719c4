//! Parsing the flattened literal payload into a grid.

use crate::collection::chunks_of;
use crate::core::marker::MarkerSet;
use crate::core::Value;
use crate::table::error::EvalError;

/// Header row plus condition rows of equal width.
#[derive(Debug, PartialEq)]
pub(crate) struct Grid {
    pub(crate) header: Vec<Value>,
    pub(crate) rows: Vec<Vec<Value>>,
    pub(crate) output_index: usize,
}

/// Locate the output column and tile the payload into rows.
///
/// The output marker must occur exactly once; its position fixes the table
/// width, making it the last header cell. The payload must tile evenly
/// into rows of that width.
pub(crate) fn parse(values: &[Value], markers: &MarkerSet) -> Result<Grid, EvalError> {
    let out = Value::Marker(markers.out);

    let mut positions = values
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == out)
        .map(|(index, _)| index);
    let output_index = positions.next().ok_or(EvalError::MissingOutput)?;
    if positions.next().is_some() {
        return Err(EvalError::DuplicatedOutput);
    }

    let column_count = output_index + 1;
    if values.len() % column_count != 0 {
        return Err(EvalError::ColumnCountMismatch);
    }

    let mut chunks = chunks_of(values, column_count).into_iter();
    let header = chunks
        .next()
        .expect("a located output marker guarantees at least one full row");
    let rows: Vec<Vec<Value>> = chunks.collect();

    Ok(Grid {
        header,
        rows,
        output_index,
    })
}
