use crate::domain::model::{FlatResult, Matrix};

/// Flattens the matrix in clockwise spiral order, starting down the left
/// column of the outer ring, then recursing inward.
///
/// Cursors are `isize` because `bottom` and `right` legitimately step below
/// zero on single-row and single-column inputs.
pub fn spiral_order(matrix: &Matrix) -> FlatResult {
    if matrix.is_empty() {
        return Vec::new();
    }

    let rows = &matrix.rows;
    let mut result = Vec::with_capacity(matrix.cell_count());

    let mut top: isize = 0;
    let mut bottom: isize = matrix.row_count() as isize - 1;
    let mut left: isize = 0;
    let mut right: isize = matrix.col_count() as isize - 1;

    while top <= bottom && left <= right {
        // Left column, top to bottom.
        for i in top..=bottom {
            result.push(rows[i as usize][left as usize]);
        }
        left += 1;

        // Bottom row, left to right; the range is empty once columns run out.
        for i in left..=right {
            result.push(rows[bottom as usize][i as usize]);
        }
        bottom -= 1;

        // Right column, bottom to top; skipped when the left-column walk
        // already consumed the last remaining column.
        if left <= right {
            for i in (top..=bottom).rev() {
                result.push(rows[i as usize][right as usize]);
            }
            right -= 1;
        }

        // Top row, right to left; skipped when the bottom-row walk already
        // consumed the last remaining row.
        if top <= bottom {
            for i in (left..=right).rev() {
                result.push(rows[top as usize][i as usize]);
            }
            top += 1;
        }
    }

    result
}
