use qrfaktura::core::*;
use rust_decimal_macros::dec;

fn main() {
    // Cash rounding on the 0.05 grid
    for amount in [dec!(10.02), dec!(10.025), dec!(10.03), dec!(10.07), dec!(-0.03)] {
        println!("{amount:>8} CHF -> {}", Currency::Chf.round(amount));
    }
    println!("---");

    // 3 h at 10.00 with 8.1% VAT
    let lines = [TotalsLine {
        subtotal_after_discount: dec!(30.00),
        tva_rate: dec!(8.1),
    }];
    let plain = compute_invoice_totals(&lines, None, Currency::Chf);
    println!("Net:     {}", plain.subtotal_after_global_discount);
    println!("VAT:     {}", plain.tva_amount);
    println!("Total:   {}", plain.total);
    println!("---");

    // Same line with a 10% loyalty discount on the whole document
    let discounted = compute_invoice_totals(&lines, Some(&Discount::percent(dec!(10))), Currency::Chf);
    println!("Discount: -{}", discounted.global_discount_amount);
    println!("Net:      {}", discounted.subtotal_after_global_discount);
    println!("VAT:      {}", discounted.tva_amount);
    println!("Total:    {}", discounted.total);
    println!("---");

    // Mixed rates: each bucket is rounded on its own
    let mixed = [
        TotalsLine {
            subtotal_after_discount: dec!(100.00),
            tva_rate: dec!(8.1),
        },
        TotalsLine {
            subtotal_after_discount: dec!(42.50),
            tva_rate: dec!(2.6),
        },
    ];
    let totals = compute_invoice_totals(&mixed, None, Currency::Chf);
    for bucket in &totals.vat_breakdown {
        println!("VAT {}% on {}: {}", bucket.rate, bucket.taxable_amount, bucket.tva_amount);
    }
    println!("Total:   {}", totals.total);

    // A discount that does not validate
    if let Err(e) = validate_discount(dec!(50), DiscountType::Amount, dec!(40)) {
        println!("---");
        println!("rejected: {e}");
    }
}
