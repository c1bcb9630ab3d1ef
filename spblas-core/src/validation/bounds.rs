//! Index and dense-extent validation
//!
//! Pure checks with no allocation beyond the index vectors they normalize.

use alloc::vec::Vec;

use crate::descriptor::{IndexBase, Layout};
use crate::error::{Result, SpblasError};

/// Shift indices from the external index base to 0-based and bounds-check them
///
/// Every normalized index must be strictly below `bound`.
pub fn normalize_indices(mut indices: Vec<usize>, base: IndexBase, bound: usize) -> Result<Vec<usize>> {
    let offset = base.offset();
    for index in indices.iter_mut() {
        let shifted = index
            .checked_sub(offset)
            .ok_or(SpblasError::IndexOutOfBounds { index: *index, bound })?;
        if shifted >= bound {
            return Err(SpblasError::IndexOutOfBounds { index: shifted, bound });
        }
        *index = shifted;
    }
    Ok(indices)
}

/// Number of elements a dense rows × cols operand spans in its flat buffer
///
/// Returns `None` on arithmetic overflow.
pub const fn dense_extent(layout: Layout, rows: usize, cols: usize, ld: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    let (lines, line_len) = match layout {
        Layout::RowMajor => (rows, cols),
        Layout::ColumnMajor => (cols, rows),
    };
    match (lines - 1).checked_mul(ld) {
        Some(span) => span.checked_add(line_len),
        None => None,
    }
}

/// Validate that a dense buffer can hold a rows × cols operand
///
/// The leading dimension must cover one full line (a row for row-major, a
/// column for column-major) and the buffer must reach the last element.
pub fn validate_dense_extent(len: usize, layout: Layout, rows: usize, cols: usize, ld: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let line_len = match layout {
        Layout::RowMajor => cols,
        Layout::ColumnMajor => rows,
    };
    if ld < line_len {
        return Err(SpblasError::InvalidValue("leading dimension smaller than dense extent"));
    }
    match dense_extent(layout, rows, cols, ld) {
        Some(required) if required <= len => Ok(()),
        _ => Err(SpblasError::InvalidValue("dense buffer shorter than declared extent")),
    }
}
