//! Permutation parity.

/// Returns true when the slice is an even permutation of its sorted
/// order, i.e. when its inversion count is even.
///
/// Sliding a tile never changes the parity of the tile permutation
/// combined with the blank's row, so a Game of Fifteen that starts
/// from an odd permutation of `1..=15` can never reach the solved
/// position. [`crate::fifteen::RandomInitializer`] relies on this
/// check to hand out solvable boards only.
#[must_use]
pub fn is_even<T: Ord>(permutation: &[T]) -> bool {
    let mut inversions = 0usize;
    for (i, left) in permutation.iter().enumerate() {
        for right in &permutation[i + 1..] {
            if left > right {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 0
}
