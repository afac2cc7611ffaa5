//! Display formatting in the dashboard's en-IN conventions.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Groups an unsigned digit string the Indian way: the last three digits,
/// then pairs (`12345678` -> `1,23,45,678`).
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Formats a rupee amount with Indian grouping and at most two decimals,
/// e.g. `₹1,23,456.5`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    match frac_part {
        Some(frac) => format!("{sign}₹{}.{frac}", group_indian(int_part)),
        None => format!("{sign}₹{}", group_indian(int_part)),
    }
}

/// Formats a market capitalisation given in crores: `₹xL Cr`, `₹xK Cr` or `₹x Cr`.
pub fn format_market_cap(crores: Decimal) -> String {
    let one_decimal = |v: Decimal| v.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if crores >= dec!(100000) {
        format!("₹{:.1}L Cr", one_decimal(crores / dec!(100000)))
    } else if crores >= dec!(1000) {
        format!("₹{:.1}K Cr", one_decimal(crores / dec!(1000)))
    } else {
        format!("₹{} Cr", crores.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// `1 Month`, `3 Months` for 30 days and over; `21 Days` below that.
pub fn format_holding_period(days: u32) -> String {
    if days >= 30 {
        let months = (days + 15) / 30;
        let plural = if months > 1 { "s" } else { "" };
        format!("{months} Month{plural}")
    } else {
        format!("{days} Days")
    }
}

/// `05 Jan 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
