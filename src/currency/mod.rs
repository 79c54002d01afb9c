use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Number of fractional digits shown in every display slot.
pub const DISPLAY_PRECISION: u32 = 2;

/// Renders a value as `$` followed by the amount fixed to two decimals.
///
/// No grouping separator is inserted. Negative values keep their sign after
/// the symbol, so a deficit of 300 renders as `$-300.00`.
pub fn format_currency(value: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_fixed(value, DISPLAY_PRECISION))
}

/// Formats `value` with exactly `precision` fractional digits, rounding half
/// away from zero.
pub fn format_fixed(value: Decimal, precision: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    if rounded.is_zero() {
        // `-0.004` rounds to a signed zero; never render `-0.00`.
        rounded.set_sign_positive(true);
    }
    let mut text = rounded.to_string();
    // Values near the decimal limit cannot carry the extra scale.
    let missing = precision.saturating_sub(rounded.scale());
    if missing > 0 {
        if rounded.scale() == 0 {
            text.push('.');
        }
        text.extend(std::iter::repeat('0').take(missing as usize));
    }
    text
}

/// Parses the longest leading numeric prefix of `raw`.
///
/// Accepts surrounding whitespace, an optional sign, digits with an optional
/// fractional part and an optional exponent. Returns `None` when no digits
/// lead the input. Magnitudes too large for a decimal clamp to
/// `Decimal::MAX` (or `MIN`), and ones too small to represent become zero.
pub fn parse_numeric_prefix(raw: &str) -> Option<Decimal> {
    let prefix = numeric_prefix(raw.trim_start())?;
    let (sign, unsigned) = match prefix.strip_prefix(['+', '-']) {
        Some(rest) if prefix.starts_with('-') => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", prefix),
    };
    let normalized = if unsigned.starts_with('.') {
        format!("{sign}0{unsigned}")
    } else {
        format!("{sign}{unsigned}")
    };
    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        Decimal::from_str(&normalized)
    };
    match parsed {
        Ok(value) => Some(value),
        Err(_) => Some(out_of_range(raw, &normalized, sign == "-")),
    }
}

fn out_of_range(raw: &str, normalized: &str, negative: bool) -> Decimal {
    let tiny = normalized
        .split_once(['e', 'E'])
        .is_some_and(|(_, exponent)| exponent.starts_with('-'));
    if tiny {
        tracing::warn!(input = raw, "amount too small to represent; treated as zero");
        Decimal::ZERO
    } else if negative {
        tracing::warn!(input = raw, "amount out of range; clamped to the smallest decimal");
        Decimal::MIN
    } else {
        tracing::warn!(input = raw, "amount out of range; clamped to the largest decimal");
        Decimal::MAX
    }
}

/// Lenient parse used for line-item text: anything unreadable becomes zero.
///
/// Mid-edit input such as `"12."` yields the valid prefix (`12`), while `""`,
/// `"."` or `"abc"` yield zero.
pub fn parse_lenient(raw: &str) -> Decimal {
    match parse_numeric_prefix(raw) {
        Some(value) => value,
        None => {
            if !raw.trim().is_empty() {
                tracing::warn!(input = raw, "unreadable amount treated as zero");
            }
            Decimal::ZERO
        }
    }
}

fn numeric_prefix(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A trailing `.` is only kept when digits precede it.
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let prefix = &input[..end];
    Some(prefix.strip_suffix('.').unwrap_or(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn formats_zero_and_whole_amounts() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(dec("1900")), "$1900.00");
        assert_eq!(format_currency(dec("2550")), "$2550.00");
    }

    #[test]
    fn formats_without_grouping_and_rounds_half_away() {
        assert_eq!(format_currency(dec("1234567.891")), "$1234567.89");
        assert_eq!(format_currency(dec("0.125")), "$0.13");
        assert_eq!(format_currency(dec("-300")), "$-300.00");
        assert_eq!(format_currency(dec("-0.001")), "$0.00");
    }

    #[test]
    fn prefix_parse_accepts_partial_numbers() {
        assert_eq!(parse_numeric_prefix("12."), Some(dec("12")));
        assert_eq!(parse_numeric_prefix(".5"), Some(dec("0.5")));
        assert_eq!(parse_numeric_prefix("  42abc"), Some(dec("42")));
        assert_eq!(parse_numeric_prefix("1.5.3"), Some(dec("1.5")));
        assert_eq!(parse_numeric_prefix("1e3"), Some(dec("1000")));
        assert_eq!(parse_numeric_prefix("2e"), Some(dec("2")));
        assert_eq!(parse_numeric_prefix("-7"), Some(dec("-7")));
    }

    #[test]
    fn prefix_parse_rejects_non_numbers() {
        assert_eq!(parse_numeric_prefix(""), None);
        assert_eq!(parse_numeric_prefix("."), None);
        assert_eq!(parse_numeric_prefix("-"), None);
        assert_eq!(parse_numeric_prefix("abc"), None);
        assert_eq!(parse_numeric_prefix("$12"), None);
    }

    #[test]
    fn oversized_prefixes_clamp_instead_of_vanishing() {
        assert_eq!(parse_numeric_prefix("1e29"), Some(Decimal::MAX));
        assert_eq!(
            parse_numeric_prefix("1234567890123456789012345678901234567890"),
            Some(Decimal::MAX)
        );
        assert_eq!(parse_numeric_prefix("-1e40"), Some(Decimal::MIN));
        assert_eq!(parse_numeric_prefix("5e-40"), Some(Decimal::ZERO));
        assert_eq!(parse_lenient("1e29abc"), Decimal::MAX);
    }

    #[test]
    fn formats_values_at_the_decimal_limit() {
        assert_eq!(format_currency(Decimal::MAX), "$79228162514264337593543950335.00");
        assert_eq!(format_currency(Decimal::MIN), "$-79228162514264337593543950335.00");
    }

    #[test]
    fn lenient_parse_degrades_to_zero() {
        assert_eq!(parse_lenient("oops"), Decimal::ZERO);
        assert_eq!(parse_lenient(""), Decimal::ZERO);
        assert_eq!(parse_lenient("1200"), dec("1200"));
    }
}
