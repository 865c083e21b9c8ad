//! Property-based tests for permutation parity.

#[cfg(test)]
mod tests {
    use crate::parity::is_even;
    use proptest::prelude::*;

    fn shuffled_tiles() -> impl Strategy<Value = Vec<u8>> {
        Just((1..=15u8).collect::<Vec<u8>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn swapping_two_tiles_flips_parity(
            mut permutation in shuffled_tiles(),
            i in 0usize..15,
            j in 0usize..15,
        ) {
            prop_assume!(i != j);
            let before = is_even(&permutation);
            permutation.swap(i, j);
            prop_assert_eq!(is_even(&permutation), !before);
        }

        #[test]
        fn parity_survives_relabeling(permutation in shuffled_tiles()) {
            // Doubling keeps the relative order of every pair.
            let doubled: Vec<u16> = permutation.iter().map(|&v| u16::from(v) * 2).collect();
            prop_assert_eq!(is_even(&permutation), is_even(&doubled));
        }

        #[test]
        fn reversal_matches_inversion_formula(len in 0usize..24) {
            let reversed: Vec<usize> = (0..len).rev().collect();
            let inversions = len * len.saturating_sub(1) / 2;
            prop_assert_eq!(is_even(&reversed), inversions % 2 == 0);
        }
    }
}
