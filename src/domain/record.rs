use chrono::NaiveDate;

use super::{Amount, Clock};

/// Date format accepted from users: day.month.year, e.g. "04.06.2021".
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One dated entry: money spent or calories eaten.
/// Records are immutable once built; the ledger only ever appends them.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub amount: Amount,
    /// Free text, never used in aggregation
    pub comment: String,
    pub date: NaiveDate,
}

impl Record {
    pub fn new(amount: Amount, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Build a record from user input. A missing date means "today" according
    /// to `clock`; a present one must match `DATE_FORMAT`.
    pub fn parse(
        amount: Amount,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &impl Clock,
    ) -> Result<Self, ParseDateError> {
        let date = match date {
            Some(input) => parse_date(input)?,
            None => clock.today(),
        };
        Ok(Self::new(amount, comment, date))
    }
}

/// Parse a `dd.mm.yyyy` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| ParseDateError {
        input: input.to_string(),
    })
}

/// Render a date back in the user-facing `dd.mm.yyyy` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{input}': expected dd.mm.yyyy")]
pub struct ParseDateError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("04.06.2021"), Ok(ymd(2021, 6, 4)));
        assert_eq!(parse_date("30.05.2021"), Ok(ymd(2021, 5, 30)));
        assert_eq!(parse_date("29.02.2024"), Ok(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("2021-06-04").is_err());
        assert!(parse_date("04/06/2021").is_err());
        assert!(parse_date("32.01.2021").is_err());
        assert!(parse_date("01.13.2021").is_err());
        assert!(parse_date("29.02.2021").is_err());
        assert!(parse_date("aa.bb.cccc").is_err());
        assert!(parse_date("04.06.2021 garbage").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_error_keeps_input() {
        let err = parse_date("4-6-2021").unwrap_err();
        assert_eq!(err.input, "4-6-2021");
        assert_eq!(err.to_string(), "invalid date '4-6-2021': expected dd.mm.yyyy");
    }

    #[test]
    fn test_record_with_explicit_date() {
        let clock = FixedClock::new(ymd(2021, 6, 5));
        let record = Record::parse(3000.0, "бар в Танин др", Some("04.06.2021"), &clock).unwrap();

        assert_eq!(record.date, ymd(2021, 6, 4));
        assert_eq!(record.amount, 3000.0);
        assert_eq!(record.comment, "бар в Танин др");
    }

    #[test]
    fn test_record_defaults_to_today() {
        let clock = FixedClock::new(ymd(2021, 6, 5));
        let record = Record::parse(145.0, "кофе", None, &clock).unwrap();
        assert_eq!(record.date, ymd(2021, 6, 5));
    }

    #[test]
    fn test_record_accepts_zero_and_negative_amounts() {
        let clock = FixedClock::new(ymd(2021, 6, 5));
        assert!(Record::parse(0.0, "", None, &clock).is_ok());
        assert!(Record::parse(-10.0, "refund", None, &clock).is_ok());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2021, 6, 4)), "04.06.2021");
    }
}
