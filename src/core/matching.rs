//! Row matching against the header signals.
//!
//! Pure functions over parsed rows: the cell-by-cell matcher, the
//! normal/fallback partition, and the duplicate projection that excludes
//! the output column.

use crate::collection::has_duplicate;
use crate::core::marker::MarkerSet;
use crate::core::value::Value;

/// Match one condition row against the header row.
///
/// Wildcard cells pass without comparison, the cell under the output marker
/// is captured as the candidate output, and any other cell must be
/// structurally equal to its header counterpart. The first mismatch returns
/// the table's undefined sentinel.
pub(crate) fn match_row(header: &[Value], row: &[Value], markers: &MarkerSet) -> Value {
    let any = Value::Marker(markers.cell.any());
    let otherwise = Value::Marker(markers.cell.otherwise());
    let out = Value::Marker(markers.out);

    let mut result = Value::Marker(markers.undefined);
    for (index, cell) in row.iter().enumerate() {
        if *cell == any || *cell == otherwise {
            continue;
        }
        if header.get(index) == Some(&out) {
            result = cell.clone();
            continue;
        }
        if header.get(index) != Some(cell) {
            return Value::Marker(markers.undefined);
        }
    }
    result
}

/// Partition condition rows into ordinary rows and `otherwise` rows,
/// preserving declared order within each group.
pub(crate) fn split_otherwise(
    rows: Vec<Vec<Value>>,
    markers: &MarkerSet,
) -> (Vec<Vec<Value>>, Vec<Vec<Value>>) {
    let otherwise = Value::Marker(markers.cell.otherwise());
    rows.into_iter().partition(|row| !row.contains(&otherwise))
}

/// Whether any two condition rows are structurally identical once the
/// output column is excluded.
pub(crate) fn has_duplicate_rows_except(rows: &[Vec<Value>], except_index: usize) -> bool {
    let projected: Vec<Vec<Value>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(index, _)| *index != except_index)
                .map(|(_, cell)| cell.clone())
                .collect()
        })
        .collect();
    has_duplicate(&projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::marker::MarkerSet;

    fn header(markers: &MarkerSet) -> Vec<Value> {
        vec![Value::from(true), Value::from(false), Value::Marker(markers.out)]
    }

    #[test]
    fn matching_row_yields_its_output() {
        let markers = MarkerSet::new();
        let row = vec![Value::from(true), Value::from(false), Value::from(7)];

        assert_eq!(match_row(&header(&markers), &row, &markers), Value::from(7));
    }

    #[test]
    fn wildcard_cells_skip_comparison() {
        let markers = MarkerSet::new();
        let row = vec![
            Value::Marker(markers.cell.any()),
            Value::Marker(markers.cell.any()),
            Value::from("always"),
        ];

        assert_eq!(
            match_row(&header(&markers), &row, &markers),
            Value::from("always")
        );
    }

    #[test]
    fn otherwise_cells_also_skip_comparison() {
        let markers = MarkerSet::new();
        let row = vec![
            Value::from(true),
            Value::Marker(markers.cell.otherwise()),
            Value::from(1),
        ];

        assert_eq!(match_row(&header(&markers), &row, &markers), Value::from(1));
    }

    #[test]
    fn first_mismatch_returns_the_sentinel() {
        let markers = MarkerSet::new();
        let row = vec![Value::from(false), Value::from(false), Value::from(7)];

        assert_eq!(
            match_row(&header(&markers), &row, &markers),
            Value::Marker(markers.undefined)
        );
    }

    #[test]
    fn nested_values_match_structurally() {
        let markers = MarkerSet::new();
        let signals = vec![Value::from(vec![0, 0]), Value::Marker(markers.out)];
        let row = vec![Value::from(vec![0, 0]), Value::from(1)];

        assert_eq!(match_row(&signals, &row, &markers), Value::from(1));
    }

    #[test]
    fn split_preserves_declared_order() {
        let markers = MarkerSet::new();
        let otherwise = Value::Marker(markers.cell.otherwise());
        let rows = vec![
            vec![Value::from(1), Value::from(10)],
            vec![otherwise.clone(), Value::from(20)],
            vec![Value::from(3), Value::from(30)],
            vec![Value::from(4), otherwise.clone()],
        ];

        let (normal, fallback) = split_otherwise(rows, &markers);

        assert_eq!(
            normal,
            vec![
                vec![Value::from(1), Value::from(10)],
                vec![Value::from(3), Value::from(30)],
            ]
        );
        assert_eq!(
            fallback,
            vec![
                vec![otherwise.clone(), Value::from(20)],
                vec![Value::from(4), otherwise],
            ]
        );
    }

    #[test]
    fn duplicate_projection_ignores_the_output_column() {
        let rows = vec![
            vec![Value::from(true), Value::from(false), Value::from(1)],
            vec![Value::from(true), Value::from(false), Value::from(2)],
        ];

        assert!(has_duplicate_rows_except(&rows, 2));
        assert!(!has_duplicate_rows_except(&rows, 0));
    }
}
