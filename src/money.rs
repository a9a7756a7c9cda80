//! Money parsing for the API boundary
//!
//! Amounts and balances travel as decimal strings and are held as
//! [`Decimal`] everywhere behind this module. Parsing is strict:
//!
//! - Rejects empty strings
//! - Rejects `+5` (sign is implicit)
//! - Rejects `.5` (must be `0.5`) and `5.` (must be `5` or `5.0`)
//! - Rejects scientific notation
//! - Rejects more than [`MONEY_SCALE`] fraction digits

use rust_decimal::prelude::*;
use thiserror::Error;

/// Fraction digits every balance is representable in (sub-unit = 0.00001).
pub const MONEY_SCALE: u32 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be empty")]
    Empty,

    #[error("Invalid format: + prefix not allowed")]
    PlusPrefix,

    #[error("Invalid format: use 0.5 not .5")]
    LeadingDot,

    #[error("Invalid format: use 5.0 not 5.")]
    TrailingDot,

    #[error("Invalid format: scientific notation not allowed")]
    Scientific,

    #[error("Invalid decimal: {0}")]
    Malformed(String),

    #[error("Too many fraction digits: {scale} (max {max})", max = MONEY_SCALE)]
    TooPrecise { scale: u32 },

    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Amount cannot be negative")]
    Negative,
}

/// Parse a decimal string under the strict format rules. Sign is allowed.
pub fn parse_decimal(s: &str) -> Result<Decimal, AmountError> {
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    if s.starts_with('+') {
        return Err(AmountError::PlusPrefix);
    }
    if s.contains('e') || s.contains('E') {
        return Err(AmountError::Scientific);
    }

    let unsigned = s.strip_prefix('-').unwrap_or(s);
    if unsigned.starts_with('.') {
        return Err(AmountError::LeadingDot);
    }
    if unsigned.ends_with('.') {
        return Err(AmountError::TrailingDot);
    }
    let well_formed = !unsigned.is_empty()
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.chars().filter(|&c| c == '.').count() <= 1;
    if !well_formed {
        return Err(AmountError::Malformed(s.to_string()));
    }

    let d = Decimal::from_str(s).map_err(|e| AmountError::Malformed(e.to_string()))?;
    if d.scale() > MONEY_SCALE {
        return Err(AmountError::TooPrecise { scale: d.scale() });
    }
    Ok(d)
}

/// Parse a transfer amount: strict format and strictly positive.
pub fn parse_amount(s: &str) -> Result<Decimal, AmountError> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    Ok(d)
}

/// Parse an opening balance: strict format, zero allowed, never negative.
pub fn parse_balance(s: &str) -> Result<Decimal, AmountError> {
    let d = parse_decimal(s)?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(AmountError::Negative);
    }
    // "-0" is stored as 0
    Ok(d.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("20.00").unwrap(), dec!(20.00));
        assert_eq!(parse_amount("0.00001").unwrap(), dec!(0.00001));
        assert_eq!(parse_amount("7").unwrap(), dec!(7));
    }

    #[test]
    fn test_parse_amount_keeps_scale() {
        assert_eq!(parse_amount("20.00").unwrap().to_string(), "20.00");
    }

    #[test]
    fn test_parse_amount_rejects_format() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("+5"), Err(AmountError::PlusPrefix));
        assert_eq!(parse_amount(".5"), Err(AmountError::LeadingDot));
        assert_eq!(parse_amount("5."), Err(AmountError::TrailingDot));
        assert_eq!(parse_amount("1e3"), Err(AmountError::Scientific));
        assert!(matches!(parse_amount("abc"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1.2.3"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount(" 5"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1_000"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("-"), Err(AmountError::Malformed(_))));
    }

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert_eq!(parse_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("0.00000"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("-1.5"), Err(AmountError::NotPositive));
    }

    #[test]
    fn test_parse_amount_rejects_excess_precision() {
        assert_eq!(
            parse_amount("0.000001"),
            Err(AmountError::TooPrecise { scale: 6 })
        );
    }

    #[test]
    fn test_parse_balance() {
        assert_eq!(parse_balance("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_balance("-0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_balance("100.00").unwrap(), dec!(100.00));
        assert_eq!(parse_balance("-0.01"), Err(AmountError::Negative));
    }

    #[test]
    fn test_parse_decimal_overflow() {
        let huge = "9".repeat(40);
        assert!(matches!(parse_decimal(&huge), Err(AmountError::Malformed(_))));
    }
}
