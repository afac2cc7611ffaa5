use rust_decimal::Decimal;

/// Arithmetic mean of `value` over `items`; `None` for an empty slice.
pub fn average<T>(items: &[T], value: impl Fn(&T) -> Decimal) -> Option<Decimal> {
    if items.is_empty() {
        return None;
    }
    let sum: Decimal = items.iter().map(value).sum();
    Some(sum / Decimal::from(items.len()))
}

/// Percentage of `items` whose `outcome` is strictly positive.
pub fn win_rate<T>(items: &[T], outcome: impl Fn(&T) -> Decimal) -> Option<Decimal> {
    if items.is_empty() {
        return None;
    }
    let wins = count_positive(items, outcome);
    Some(Decimal::from(wins) / Decimal::from(items.len()) * Decimal::ONE_HUNDRED)
}

pub fn count_positive<T>(items: &[T], outcome: impl Fn(&T) -> Decimal) -> usize {
    items.iter().filter(|item| outcome(*item) > Decimal::ZERO).count()
}

/// Percentage change from `previous` to `current`; `None` when `previous` is zero.
pub fn price_change_pct(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some((current - previous) / previous * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn average_of_nothing_is_no_data() {
        let empty: [Decimal; 0] = [];
        assert_eq!(average(&empty, |d| *d), None);
        assert_eq!(win_rate(&empty, |d| *d), None);
    }

    #[test]
    fn average_divides_by_count() {
        let returns = [dec!(8.2), dec!(12.4), dec!(15.7)];
        assert_eq!(average(&returns, |d| *d), Some(dec!(12.1)));
    }

    #[test]
    fn zero_outcome_is_not_a_win() {
        let outcomes = [dec!(4), dec!(0), dec!(-2), dec!(0.1)];
        assert_eq!(count_positive(&outcomes, |d| *d), 2);
        assert_eq!(win_rate(&outcomes, |d| *d), Some(dec!(50)));
    }

    #[test]
    fn price_change_guards_zero_base() {
        assert_eq!(price_change_pct(dec!(110), dec!(100)), Some(dec!(10)));
        assert_eq!(price_change_pct(dec!(90), dec!(100)), Some(dec!(-10)));
        assert_eq!(price_change_pct(dec!(90), Decimal::ZERO), None);
    }
}
