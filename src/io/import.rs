use std::io::Read;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::AppError;
use crate::domain::{parse_amount, Clock, Record};

/// Result of reading records from CSV. Good rows are kept in file order;
/// bad rows are reported and skipped.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub records: Vec<Record>,
    pub errors: Vec<ImportError>,
}

/// Error that occurred on a single CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "line {} ({}): {}", self.line, field, self.error),
            None => write!(f, "line {}: {}", self.line, self.error),
        }
    }
}

/// Columns understood by `import_records_csv`. `date` may be left out.
pub const CSV_COLUMNS: [&str; 3] = ["amount", "comment", "date"];

/// One CSV row, matched to its columns by header name.
#[derive(Debug, Deserialize)]
struct CsvRow {
    amount: String,
    comment: String,
    #[serde(default)]
    date: Option<String>,
}

/// Read records from CSV with the columns `amount`, `comment` and optionally
/// `date`, in any order. An empty or missing date means today according to
/// `clock`. Rows with more or fewer fields than the header are skipped.
pub fn import_records_csv<R: Read>(reader: R, clock: &impl Clock) -> Result<ImportResult, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_headers(&headers)?;

    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let fallback_line = index + 2; // +2 for header and 0-indexing

        let row = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(ImportError {
                    line: e.position().map_or(fallback_line, |p| p.line() as usize),
                    field: None,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };
        let line = row.position().map_or(fallback_line, |p| p.line() as usize);

        let parsed: CsvRow = match row.deserialize(Some(&headers)) {
            Ok(parsed) => parsed,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: None,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        let amount = match parse_amount(&parsed.amount) {
            Ok(a) => a,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: Some("amount".to_string()),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let date = parsed.date.as_deref().filter(|s| !s.is_empty());
        match Record::parse(amount, parsed.comment, date, clock) {
            Ok(record) => records.push(record),
            Err(e) => errors.push(ImportError {
                line,
                field: Some("date".to_string()),
                error: e.to_string(),
            }),
        }
    }

    for error in &errors {
        warn!(%error, "skipped CSV row");
    }
    debug!(imported = records.len(), skipped = errors.len(), "CSV import finished");

    Ok(ImportResult { records, errors })
}

/// The header must name `amount` and `comment`, may name `date`, and nothing else.
fn check_headers(headers: &csv::StringRecord) -> Result<(), AppError> {
    let found: Vec<&str> = headers.iter().collect();

    let unknown = found.iter().copied().find(|h| !CSV_COLUMNS.contains(h));
    let duplicate = CSV_COLUMNS
        .iter()
        .find(|c| found.iter().filter(|h| *h == *c).count() > 1);
    let missing = ["amount", "comment"].into_iter().find(|c| !found.contains(c));

    let problem = match (unknown, duplicate, missing) {
        (Some(column), _, _) => format!("unknown column '{}'", column),
        (_, Some(column), _) => format!("duplicate column '{}'", column),
        (_, _, Some(column)) => format!("missing column '{}'", column),
        (None, None, None) => return Ok(()),
    };

    Err(AppError::Import {
        line: 1,
        message: format!(
            "{} in header '{}' (expected amount,comment[,date])",
            problem,
            found.join(",")
        ),
    })
}
