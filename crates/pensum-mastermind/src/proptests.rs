//! Property-based tests for guess evaluation.

#[cfg(test)]
mod tests {
    use crate::evaluate_guess;
    use proptest::prelude::*;

    fn code() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::char::range('A', 'F'), 0..10)
            .prop_map(|letters| letters.into_iter().collect())
    }

    fn code_pair() -> impl Strategy<Value = (String, String)> {
        prop::collection::vec((prop::char::range('A', 'F'), prop::char::range('A', 'F')), 0..10)
            .prop_map(|pairs| pairs.into_iter().unzip())
    }

    fn shuffled_pair() -> impl Strategy<Value = (String, String)> {
        prop::collection::vec(prop::char::range('A', 'F'), 0..10).prop_flat_map(|letters| {
            (Just(letters.clone()), Just(letters).prop_shuffle()).prop_map(
                |(secret, guess)| {
                    (
                        secret.into_iter().collect(),
                        guess.into_iter().collect(),
                    )
                },
            )
        })
    }

    proptest! {
        #[test]
        fn score_is_symmetric((secret, guess) in code_pair()) {
            let forward = evaluate_guess(&secret, &guess).unwrap();
            let backward = evaluate_guess(&guess, &secret).unwrap();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn guessing_the_secret_wins(secret in code()) {
            let score = evaluate_guess(&secret, &secret).unwrap();
            prop_assert_eq!(score.right_position, secret.chars().count());
            prop_assert_eq!(score.wrong_position, 0);
        }

        #[test]
        fn score_never_exceeds_code_length((secret, guess) in code_pair()) {
            let score = evaluate_guess(&secret, &guess).unwrap();
            prop_assert!(score.right_position + score.wrong_position <= secret.chars().count());
        }

        #[test]
        fn permutations_account_for_every_letter((secret, guess) in shuffled_pair()) {
            let score = evaluate_guess(&secret, &guess).unwrap();
            prop_assert_eq!(
                score.right_position + score.wrong_position,
                secret.chars().count()
            );
        }
    }
}
