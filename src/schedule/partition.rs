//! Contiguous day bucketing.

use crate::error::{ItineraryError, Result};

/// Splits `items` into `days` contiguous chunks of near-equal size.
///
/// Every chunk gets `len / days` items; the first `len % days` chunks take
/// one extra. Order is preserved and chunks never interleave, so geography
/// plays no part in which day a stop lands on. When `days` exceeds the item
/// count the trailing chunks are empty.
///
/// # Errors
///
/// [`ItineraryError::NoDays`] if `days == 0`.
///
/// # Examples
///
/// ```
/// use u_itinerary::schedule::split_into_days;
///
/// let days = split_into_days(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3).unwrap();
/// assert_eq!(days, vec![vec![1, 2, 3, 4], vec![5, 6, 7], vec![8, 9, 10]]);
/// ```
pub fn split_into_days<T: Clone>(items: &[T], days: usize) -> Result<Vec<Vec<T>>> {
    if days == 0 {
        return Err(ItineraryError::NoDays);
    }

    let per_day = items.len() / days;
    let extra = items.len() % days;

    let mut chunks = Vec::with_capacity(days);
    let mut start = 0;
    for day in 0..days {
        let size = per_day + usize::from(day < extra);
        chunks.push(items[start..start + size].to_vec());
        start += size;
    }
    debug_assert_eq!(start, items.len());

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(n: usize, days: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..n).collect();
        split_into_days(&items, days)
            .expect("days > 0")
            .iter()
            .map(Vec::len)
            .collect()
    }

    #[test]
    fn test_ten_stops() {
        assert_eq!(sizes(10, 1), vec![10]);
        assert_eq!(sizes(10, 2), vec![5, 5]);
        assert_eq!(sizes(10, 3), vec![4, 3, 3]);
        assert_eq!(sizes(10, 4), vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_more_days_than_stops() {
        assert_eq!(sizes(2, 4), vec![1, 1, 0, 0]);
        assert_eq!(sizes(0, 2), vec![0, 0]);
    }

    #[test]
    fn test_zero_days() {
        let err = split_into_days(&[1, 2], 0).unwrap_err();
        assert!(matches!(err, ItineraryError::NoDays));
    }

    #[test]
    fn test_order_preserved() {
        let items: Vec<usize> = (0..7).collect();
        let flat: Vec<usize> = split_into_days(&items, 3)
            .expect("days > 0")
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(flat, items);
    }
}
