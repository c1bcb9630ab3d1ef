//! Structural validation of compressed storage arrays

use alloc::vec::Vec;

use crate::descriptor::IndexBase;
use crate::error::{Result, SpblasError};

/// Validate and normalize start/end offset pairs of a compressed format
///
/// `starts[k]..ends[k]` addresses the entries of line `k`. After shifting by
/// the index base every range must be well formed and lie inside `0..nnz`.
pub fn normalize_offsets(
    starts: Vec<usize>,
    ends: Vec<usize>,
    lines: usize,
    nnz: usize,
    base: IndexBase,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if starts.len() != lines || ends.len() != lines {
        return Err(SpblasError::InvalidStructure("offset arrays must have one entry per line"));
    }
    let offset = base.offset();
    let shift = |value: usize| {
        value
            .checked_sub(offset)
            .ok_or(SpblasError::IndexOutOfBounds { index: value, bound: nnz + offset })
    };

    let starts = starts.into_iter().map(shift).collect::<Result<Vec<_>>>()?;
    let ends = ends.into_iter().map(shift).collect::<Result<Vec<_>>>()?;

    for (&start, &end) in starts.iter().zip(ends.iter()) {
        if start > end {
            return Err(SpblasError::InvalidStructure("line start after line end"));
        }
        if end > nnz {
            return Err(SpblasError::IndexOutOfBounds { index: end, bound: nnz + 1 });
        }
    }
    Ok((starts, ends))
}

/// Split a `lines + 1` offset array into start/end pairs
pub fn split_offsets(offsets: &[usize], lines: usize) -> Result<(Vec<usize>, Vec<usize>)> {
    if offsets.len() != lines + 1 {
        return Err(SpblasError::InvalidStructure("offset array must have lines + 1 entries"));
    }
    Ok((offsets[..lines].to_vec(), offsets[1..].to_vec()))
}

/// Check that parallel arrays agree in length
pub fn validate_lengths(expected: usize, actual: &[usize], what: &'static str) -> Result<()> {
    if actual.iter().any(|&len| len != expected) {
        return Err(SpblasError::InvalidStructure(what));
    }
    Ok(())
}
