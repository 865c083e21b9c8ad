//! Walk-through of exact rational arithmetic: operators, canonical
//! rendering, ordering, ranges, and equality past f64 precision.

use pensum::prelude::*;

fn main() -> Result<(), RationalError> {
    let half = Rational::from_i64(1, 2);
    let third = Rational::from_i64(1, 3);

    println!("1/2 + 1/3 = {}", &half + &third);
    println!("1/2 - 1/3 = {}", &half - &third);
    println!("1/2 * 1/3 = {}", &half * &third);
    println!("1/2 / 1/3 = {}", &half / &third);
    println!("-(1/2) = {}", -&half);

    println!("2/1 renders as {}", Rational::from_i64(2, 1));
    println!("-2/4 renders as {}", Rational::from_i64(-2, 4));
    println!("117/1098 reduces to {}", "117/1098".parse::<Rational>()?);

    let two_thirds = Rational::from_i64(2, 3);
    println!("1/2 < 2/3: {}", half < two_thirds);

    let range = RationalRange::new(third, two_thirds);
    println!("1/2 in [1/3, 2/3]: {}", range.contains(&half));

    let billions = Rational::new(2_000_000_000_i64, 4_000_000_000_i64)?;
    println!("2000000000/4000000000 == 1/2: {}", billions == half);

    // Far beyond what a float comparison could distinguish.
    let numerator: Rational = "912016490186296920119201192141970416029".parse()?;
    let denominator: Rational = "1824032980372593840238402384283940832058".parse()?;
    println!(
        "jumbo quotient == 1/2: {}",
        numerator.checked_div(&denominator)? == half
    );

    Ok(())
}
