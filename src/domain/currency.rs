use std::str::FromStr;

use super::Amount;

pub const USD_RATE: Amount = 72.0;
pub const EUR_RATE: Amount = 88.0;
pub const GBP_RATE: Amount = 100.0;

/// Currencies a cash report can be rendered in. Amounts are stored in rubles;
/// every other currency is reached by dividing by its fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Rub,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Rub, Currency::Usd, Currency::Eur, Currency::Gbp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
        }
    }

    /// Unit shown after an amount in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Gbp => "Pound",
        }
    }

    /// Rubles per one unit of this currency.
    pub fn rate(&self) -> Amount {
        match self {
            Currency::Rub => 1.0,
            Currency::Usd => USD_RATE,
            Currency::Eur => EUR_RATE,
            Currency::Gbp => GBP_RATE,
        }
    }

    /// Convert an amount of rubles into this currency.
    pub fn convert(&self, rubles: Amount) -> Amount {
        rubles / self.rate()
    }
}

/// Codes are matched ignoring case and surrounding whitespace, so
/// "usd", "USD" and " Usd " all name the dollar.
impl FromStr for Currency {
    type Err = UnsupportedCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rub" => Ok(Currency::Rub),
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "gbp" => Ok(Currency::Gbp),
            _ => Err(UnsupportedCurrencyError {
                code: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency: {code} (expected one of rub, usd, eur, gbp)")]
pub struct UnsupportedCurrencyError {
    pub code: String,
}
