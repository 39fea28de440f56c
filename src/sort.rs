use tracing::debug;

use crate::error::{Result, SortError};

/// Counts the elements strictly greater than zero.
pub fn count_positive(values: &[i32]) -> usize {
    values.iter().filter(|&&v| v > 0).count()
}

/// Sorts a binary array in place: positives become 1, everything else 0,
/// zeros first. Returns `SortError::LengthMismatch` without touching the
/// slice if `len != values.len()`.
pub fn sort_binary_in_place(values: &mut [i32], len: usize) -> Result<()> {
    if len != values.len() {
        return Err(SortError::LengthMismatch {
            len,
            actual: values.len(),
        });
    }
    rewrite(values);
    Ok(())
}

/// Sorts the whole slice; the length is taken from the slice itself.
pub fn sort_binary(values: &mut [i32]) {
    rewrite(values);
}

fn rewrite(values: &mut [i32]) {
    let mut true_count = count_positive(values);
    debug!(len = values.len(), true_count, "sorting binary array");

    for slot in values.iter_mut().rev() {
        if true_count > 0 {
            *slot = 1;
            true_count -= 1;
        } else {
            *slot = 0;
        }
    }
}

/// Returns true if the slice holds only 0s and 1s with every 0 before every 1.
pub fn is_sorted_binary(values: &[i32]) -> bool {
    values.iter().all(|&v| v == 0 || v == 1) && values.windows(2).all(|w| w[0] <= w[1])
}
