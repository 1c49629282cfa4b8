/// Finds the first index at which `values` drops to at most `x`.
///
/// `values` must be sorted in non-increasing order. Conceptually the slice
/// is padded with `+infinity` before the start and `-infinity` past the end,
/// so an answer always exists.
///
/// Loop invariant: every index below `low` holds a value above `x`, and
/// every index at or beyond `high` holds a value at most `x`.
///
/// # Returns
/// The smallest index `i` with `values[i] <= x`, or `values.len()` when
/// every value is above `x`.
///
/// # Example
/// ```
/// use trigrid::search::threshold_index;
///
/// let values = [50, 30, 30, 10, 4];
/// assert_eq!(threshold_index(30, &values), 1);
/// assert_eq!(threshold_index(100, &values), 0);
/// assert_eq!(threshold_index(3, &values), 5);
/// ```
#[must_use]
pub fn threshold_index(x: i32, values: &[i32]) -> usize {
    let mut low = 0;
    let mut high = values.len();
    while low < high {
        let middle = low + (high - low) / 2;
        if values[middle] <= x {
            high = middle;
        } else {
            low = middle + 1;
        }
    }
    low
}

/// Recursive form of [`threshold_index`]; same contract, same answer.
#[must_use]
pub fn threshold_index_recursive(x: i32, values: &[i32]) -> usize {
    search_threshold(x, values, 0, values.len())
}

// Maintains the invariant of threshold_index over the window [low, high).
fn search_threshold(x: i32, values: &[i32], low: usize, high: usize) -> usize {
    if low == high {
        return low;
    }
    let middle = low + (high - low) / 2;
    if values[middle] <= x {
        search_threshold(x, values, low, middle)
    } else {
        search_threshold(x, values, middle + 1, high)
    }
}

/// Finds the index of the maximum of a strictly unimodal slice.
///
/// `values` must strictly increase up to the maximum and strictly decrease
/// after it; either side may be empty.
///
/// Loop invariant: the peak index always lies within `[low, high]`. When a
/// middle element is below its right neighbor the slice is still rising
/// there, so the peak lies strictly to the right.
///
/// # Panics
/// Panics when `values` is empty.
///
/// # Example
/// ```
/// use trigrid::search::peak_index;
///
/// assert_eq!(peak_index(&[1, 3, 9, 7, 2]), 2);
/// assert_eq!(peak_index(&[9, 7, 2]), 0);
/// assert_eq!(peak_index(&[1, 3, 9]), 2);
/// ```
#[must_use]
pub fn peak_index(values: &[i32]) -> usize {
    assert!(!values.is_empty(), "a unimodal slice cannot be empty");
    let mut low = 0;
    let mut high = values.len() - 1;
    while low < high {
        let middle = low + (high - low) / 2;
        if values[middle] < values[middle + 1] {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

/// Recursive form of [`peak_index`]; same contract, same answer.
///
/// # Panics
/// Panics when `values` is empty.
#[must_use]
pub fn peak_index_recursive(values: &[i32]) -> usize {
    assert!(!values.is_empty(), "a unimodal slice cannot be empty");
    search_peak(values, 0, values.len() - 1)
}

// Maintains the invariant of peak_index over the window [low, high].
fn search_peak(values: &[i32], low: usize, high: usize) -> usize {
    if low == high {
        return low;
    }
    let middle = low + (high - low) / 2;
    if values[middle] < values[middle + 1] {
        search_peak(values, middle + 1, high)
    } else {
        search_peak(values, low, middle)
    }
}
