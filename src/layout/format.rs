//! Number and date formatting for print (Swiss conventions).

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// `1'234.50`: two decimals, apostrophe thousands separator.
pub fn format_amount(amount: Decimal) -> String {
    format_grouped(amount, 2)
}

/// Quantity with a fixed number of fraction digits (2 or 3).
pub fn format_quantity(quantity: Decimal, decimals: u32) -> String {
    format_grouped(quantity, decimals)
}

/// `8.1%`, `0%`: trailing zeros dropped.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// `02.03.2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn format_grouped(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp(decimals);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('\'');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(32.45)), "32.45");
        assert_eq!(format_amount(dec!(1234.5)), "1'234.50");
        assert_eq!(format_amount(dec!(1234567.891)), "1'234'567.89");
        assert_eq!(format_amount(dec!(-3)), "-3.00");
    }

    #[test]
    fn quantities() {
        assert_eq!(format_quantity(dec!(3), 2), "3.00");
        assert_eq!(format_quantity(dec!(1.25), 3), "1.250");
    }

    #[test]
    fn rates() {
        assert_eq!(format_rate(dec!(8.10)), "8.1%");
        assert_eq!(format_rate(dec!(0)), "0%");
        assert_eq!(format_rate(dec!(2.6)), "2.6%");
    }

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(format_date(d), "02.03.2026");
    }
}
