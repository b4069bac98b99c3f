// ============================================================================
// Render Table Example
// ============================================================================
//
// Run with `--features logging` to print a debug event per render call.

use rust_decimal::Decimal;
use vallader_numerals::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Vallader Numerals ===\n");

    let vallader = Vallader::new();

    println!("{:>16}  {:<40} ordinal", "number", "cardinal");
    for value in [0i64, 1, 3, 20, 21, 28, 101, 200, 2021, 1_000_001, -30] {
        let number = Numeral::from(value);
        let cardinal = vallader.to_cardinal(&number).unwrap();
        let ordinal = vallader.to_ordinal(&number).unwrap();
        println!("{:>16}  {:<40} {}", value, cardinal, ordinal);
    }

    println!("\nDecimals:");
    let decimals = [
        Numeral::from(Decimal::new(150, 2)),
        Numeral::try_from(-0.25).unwrap(),
        "3.14159".parse().unwrap(),
    ];
    for number in &decimals {
        println!("  {} -> {}", number, vallader.to_cardinal(number).unwrap());
    }

    println!("\nLimits:");
    let too_big: Numeral = format!("1{}", "0".repeat(65)).parse().unwrap();
    match vallader.to_cardinal(&too_big) {
        Ok(words) => println!("  unexpectedly rendered: {}", words),
        Err(err) => println!("  10^65 -> {}", err),
    }
}
