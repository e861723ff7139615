use rust_decimal::Decimal;
use thiserror::Error;

/// Why a dollar amount was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid dollar amount")]
    NotANumber,

    #[error("Please enter a positive dollar amount")]
    Negative,
}

/// Failure to turn a field into a [`Decimal`] amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A valid non-negative number too large for [`Decimal`].
    #[error("Please enter a smaller dollar amount")]
    OutOfRange,
}

/// `true` for `1`, `12`, `123`, `1,234`, `12,345,678`; `false` for stray commas.
fn is_thousands_grouped(integer: &str) -> bool {
    let all_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && all_digits(g));
    leading_ok && groups.all(|g| g.len() == 3 && all_digits(g))
}

/// Trims whitespace and removes commas used as thousands separators.
///
/// Only digits, one sign, `.`, exponent markers and well-placed commas may
/// remain; commas are allowed in the integer part only.
fn normalize_amount_input(s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | ',' | '+' | '-' | 'e' | 'E');
    if !trimmed.chars().all(allowed) {
        return Err(ValidationError::NotANumber);
    }
    if !trimmed.contains(',') {
        return Ok(trimmed.to_string());
    }

    let mantissa_end = trimmed.find(['e', 'E']).unwrap_or(trimmed.len());
    let mantissa = &trimmed[..mantissa_end];
    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if fraction.contains(',')
        || trimmed[mantissa_end..].contains(',')
        || !is_thousands_grouped(integer)
    {
        return Err(ValidationError::NotANumber);
    }
    Ok(trimmed.replace(',', ""))
}

/// Normalized text plus its numeric value, or why it is not a usable amount.
fn classify(s: &str) -> Result<(String, f64), ValidationError> {
    let normalized = normalize_amount_input(s)?;
    if normalized.is_empty() {
        return Ok((normalized, 0.0));
    }

    let value: f64 = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "rejected amount: {}", e);
        ValidationError::NotANumber
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if value < 0.0 {
        return Err(ValidationError::Negative);
    }
    Ok((normalized, value))
}

/// Checks that `s` is a number and not negative.
///
/// Empty or whitespace-only input counts as zero. Plain decimals, thousands
/// separators (`1,250.75`) and scientific notation (`1e3`) are accepted at
/// any magnitude that is finite.
pub fn check_amount(s: &str) -> Result<(), ValidationError> {
    classify(s).map(|_| ())
}

/// `true` when `s` is a usable non-negative amount. Zero is accepted.
pub fn is_positive_number(s: &str) -> bool {
    check_amount(s).is_ok()
}

/// Validates `s` and converts it to a [`Decimal`].
///
/// Digits beyond 28 decimal places are rounded away, so vanishingly small
/// amounts become zero. Amounts above [`Decimal::MAX`] pass
/// [`check_amount`] but yield [`AmountError::OutOfRange`] here.
pub fn validate_amount(s: &str) -> Result<Decimal, AmountError> {
    let (normalized, value) = classify(s)?;
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .or_else(|_| {
            if value < 1e-28 {
                Ok(Decimal::ZERO)
            } else {
                Decimal::try_from(value)
            }
        })
        .map_err(|e| {
            tracing::debug!(input = %s, "amount out of range: {}", e);
            AmountError::OutOfRange
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn invalid(kind: ValidationError) -> Result<Decimal, AmountError> {
        Err(AmountError::Invalid(kind))
    }

    #[test]
    fn test_documented_examples() {
        assert!(!is_positive_number("abc"));
        assert!(!is_positive_number("-5"));
        assert!(is_positive_number("0"));
        assert!(is_positive_number("42.5"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(check_amount("abc"), Err(ValidationError::NotANumber));
        assert_eq!(check_amount("-5"), Err(ValidationError::Negative));
        assert_eq!(validate_amount("-0.01"), invalid(ValidationError::Negative));
    }

    #[test]
    fn test_non_numeric_inputs_rejected() {
        for input in [
            "abc", "12abc", "$5", "NaN", "Infinity", "0x10", "1.2.3", "--1", "1e400",
        ] {
            assert_eq!(
                check_amount(input),
                Err(ValidationError::NotANumber),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_misplaced_separators_rejected() {
        for input in ["1,,0", ",5", "1_000", "12,34", "1,000,00", "1,000.5,0", "1e3,0", "5,"] {
            assert_eq!(
                check_amount(input),
                Err(ValidationError::NotANumber),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_non_negative_inputs_accepted() {
        assert_eq!(validate_amount("42.5"), Ok(dec!(42.5)));
        assert_eq!(validate_amount("  7 "), Ok(dec!(7)));
        assert_eq!(validate_amount("1,250.75"), Ok(dec!(1250.75)));
        assert_eq!(validate_amount("-12,345,678"), invalid(ValidationError::Negative));
        assert_eq!(validate_amount("1e3"), Ok(dec!(1000)));
        assert_eq!(validate_amount("+3"), Ok(dec!(3)));
        assert!(is_positive_number("-0"));
    }

    #[test]
    fn test_magnitude_does_not_change_the_verdict() {
        let twenty_nine_nines = "99999999999999999999999999999";

        assert!(is_positive_number("1e30"));
        assert!(is_positive_number(twenty_nine_nines));
        assert!(is_positive_number("1e-40"));
        assert_eq!(check_amount("-1e30"), Err(ValidationError::Negative));
        assert_eq!(check_amount("-1e-40"), Err(ValidationError::Negative));
    }

    #[test]
    fn test_decimal_conversion_at_the_edges() {
        assert_eq!(validate_amount("1e30"), Err(AmountError::OutOfRange));
        assert_eq!(
            validate_amount("99999999999999999999999999999"),
            Err(AmountError::OutOfRange)
        );
        assert_eq!(validate_amount("1e-40"), Ok(Decimal::ZERO));
        assert_eq!(
            validate_amount("0.0000000000000000000000000000001"),
            Ok(Decimal::ZERO)
        );
        assert_eq!(
            validate_amount("79,228,162,514,264,337,593,543,950,335"),
            Ok(Decimal::MAX)
        );
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(validate_amount(""), Ok(Decimal::ZERO));
        assert_eq!(validate_amount("   "), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "Please enter a valid dollar amount"
        );
        assert_eq!(
            ValidationError::Negative.to_string(),
            "Please enter a positive dollar amount"
        );
        assert_eq!(
            AmountError::from(ValidationError::Negative).to_string(),
            "Please enter a positive dollar amount"
        );
        assert_eq!(
            AmountError::OutOfRange.to_string(),
            "Please enter a smaller dollar amount"
        );
    }
}
