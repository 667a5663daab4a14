//! Lexicographic permutation stepping.

/// Rearranges `order` into the next lexicographically greater permutation.
///
/// Returns `false` and leaves `order` untouched when it is already the last
/// (descending) permutation. Starting from the sorted sequence and stepping
/// until `false` visits every permutation of distinct elements exactly once.
///
/// # Examples
///
/// ```
/// use u_itinerary::optimize::next_permutation;
///
/// let mut order = vec![0, 1, 2];
/// let mut seen = vec![order.clone()];
/// while next_permutation(&mut order) {
///     seen.push(order.clone());
/// }
/// assert_eq!(seen, vec![
///     vec![0, 1, 2], vec![0, 2, 1], vec![1, 0, 2],
///     vec![1, 2, 0], vec![2, 0, 1], vec![2, 1, 0],
/// ]);
/// ```
pub fn next_permutation<T: Ord>(order: &mut [T]) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }

    // Rightmost ascent.
    let mut i = n - 1;
    while i > 0 && order[i - 1] >= order[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let pivot = i - 1;
    let mut j = n - 1;
    while order[j] <= order[pivot] {
        j -= 1;
    }
    order.swap(pivot, j);
    order[i..].reverse();
    true
}

/// `n!`, saturating at `u64::MAX`.
pub fn factorial(n: usize) -> u64 {
    (1..=n as u64).fold(1u64, |acc, k| acc.saturating_mul(k))
}
