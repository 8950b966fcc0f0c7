// Validate a handful of cards and print the field-level error reports.

use anyhow::Result;
use paycard::prelude::CreditCard;

fn main() -> Result<()> {
    env_logger::init();

    let good = CreditCard::builder()
        .first_name("Steve")
        .last_name("Smith")
        .month_str("9")
        .year_str("2030")
        .brand_name("visa")
        .number("4242-4242-4242-4242")
        .build()?;

    println!("=== {} ===", good.masked_number());
    println!("holder: {}", good.holder_full_name());
    println!("expired: {}", good.is_expired());
    report(&good);

    let bad = CreditCard::builder()
        .last_name("Smith")
        .month_str("9")
        .year_str("2020")
        .brand_name("visa")
        .number("4242424242424241")
        .build()?;

    println!("\n=== {} ===", bad.masked_number());
    report(&bad);

    // The bogus brand lets a test harness skip the structural checks.
    let harness = CreditCard::builder()
        .first_name("Test")
        .last_name("Harness")
        .month_str("1")
        .year_str("2030")
        .brand_name("bogus")
        .number("1")
        .build()?;

    println!("\n=== bogus test card ===");
    report(&harness);

    Ok(())
}

fn report(card: &CreditCard) {
    let errors = card.validate();
    if errors.is_empty() {
        println!("valid");
    } else {
        for e in &errors {
            println!("  {e}");
        }
    }
}
