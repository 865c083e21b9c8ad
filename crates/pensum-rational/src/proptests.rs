//! Property-based tests for canonical rational arithmetic.

#[cfg(test)]
mod tests {
    use dashu::base::Gcd;
    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Rational, RationalRange};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        // Canonical form invariants

        #[test]
        fn construction_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(*r.denominator() > IBig::ZERO);

            let g = r.numerator().clone().gcd(r.denominator().clone());
            prop_assert_eq!(IBig::from(g), IBig::ONE);
        }

        #[test]
        fn zero_numerator_collapses_to_zero(d in non_zero_int()) {
            let r = Rational::from_i64(0, d);
            prop_assert_eq!(r.numerator(), &IBig::ZERO);
            prop_assert_eq!(r.denominator(), &IBig::ONE);
        }

        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn additive_inverse(a in rational()) {
            prop_assert_eq!(&a + &(-&a), Rational::zero());
        }

        #[test]
        fn sub_is_add_neg(a in rational(), b in rational()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn mul_div_round_trip(a in rational(), n in non_zero_int(), d in non_zero_int()) {
            let b = Rational::from_i64(n, d);
            let quotient = (&a * &b).checked_div(&b).unwrap();
            prop_assert_eq!(quotient, a);
        }

        // Parsing and rendering

        #[test]
        fn parse_display_round_trip(a in rational()) {
            let parsed: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        // Ordering

        #[test]
        fn compare_agrees_with_difference_sign(a in rational(), b in rational()) {
            let diff_sign = (&a - &b).signum();
            let cmp_sign = match a.cmp(&b) {
                std::cmp::Ordering::Less => -1i8,
                std::cmp::Ordering::Equal => 0,
                std::cmp::Ordering::Greater => 1,
            };
            prop_assert_eq!(diff_sign, cmp_sign);
        }

        // Range membership

        #[test]
        fn range_membership_matches_comparisons(
            a in rational(),
            b in rational(),
            v in rational()
        ) {
            let inside = a <= v && v <= b;
            let range = RationalRange::new(a, b);
            prop_assert_eq!(range.contains(&v), inside);
        }
    }
}
