// Application layer: reports built on top of the domain ledger,
// and the error type surfaced to callers that mix parsing with reporting.

pub mod error;
pub mod reporting;

pub use error::*;
pub use reporting::*;
