/// Amounts and limits are plain floating point values. Rubles and kilocalories
/// both flow through the same arithmetic; rounding happens only when a
/// currency amount is rendered.
pub type Amount = f64;

/// Format an amount with exactly two decimal places.
/// Example: 10.0 -> "10.00", 13.636 -> "13.64", -5.5 -> "-5.50"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse a user-supplied amount such as "145", "12.5" or "-30".
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    let amount: Amount = input.parse().map_err(|_| ParseAmountError {
        input: input.to_string(),
    })?;

    if !amount.is_finite() {
        return Err(ParseAmountError {
            input: input.to_string(),
        });
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {input}")]
pub struct ParseAmountError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(13.636), "13.64");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-5.5), "-5.50");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("145"), Ok(145.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert_eq!(parse_amount("-30"), Ok(-30.0));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12,5").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("").is_err());
    }
}
