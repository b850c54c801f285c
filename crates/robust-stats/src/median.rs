//! Median Computation

use ring_buffer::HistoryBuffer;

/// Median of a slice of values.
///
/// Even-length inputs yield the mean of the two middle values. Returns `None`
/// for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median of the samples currently held in a history buffer
pub fn median_of_history(history: &HistoryBuffer<f64>) -> Option<f64> {
    median(&history.to_vec())
}

/// Per-coordinate median over a set of fixed-width rows.
///
/// Each output component is the median of that column taken independently,
/// so the result is a synthetic row that need not appear in the input.
pub fn elementwise_median<const N: usize>(rows: &[[f64; N]]) -> Option<[f64; N]> {
    if rows.is_empty() {
        return None;
    }

    let mut out = [0.0; N];
    let mut column = Vec::with_capacity(rows.len());
    for (i, slot) in out.iter_mut().enumerate() {
        column.clear();
        column.extend(rows.iter().map(|row| row[i]));
        *slot = median(&column)?;
    }
    Some(out)
}
