use thiserror::Error;

use crate::domain::{ParseAmountError, ParseDateError, UnsupportedCurrencyError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidDate(#[from] ParseDateError),

    #[error(transparent)]
    UnsupportedCurrency(#[from] UnsupportedCurrencyError),

    #[error(transparent)]
    InvalidAmount(#[from] ParseAmountError),

    #[error("Invalid record '{0}': expected AMOUNT;COMMENT[;DD.MM.YYYY]")]
    InvalidRecordSpec(String),

    #[error("Import failed at line {line}: {message}")]
    Import { line: usize, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
