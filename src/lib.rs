pub mod application;
pub mod cli;
pub mod domain;
pub mod io;

pub use application::{CalorieReport, CashReport, LedgerSummary};
pub use domain::*;
