mod common;

use std::fs::File;
use std::io::Write;

use anyhow::Result;
use common::{date, ledger_on};
use daylimit::io::import_records_csv;
use tempfile::NamedTempFile;

#[test]
fn test_import_from_file_into_ledger() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "amount,comment,date")?;
    writeln!(file, "145,кофе,")?;
    writeln!(file, "1000,Серёге за обед,")?;
    writeln!(file, "3000,бар в Танин др,04.06.2021")?;
    writeln!(file, "3000,бар,30.05.2021")?;
    writeln!(file, "oops,broken,")?;
    file.flush()?;

    let mut ledger = ledger_on("2021-06-05", 1000.0);
    let result = import_records_csv(File::open(file.path())?, ledger.clock())?;

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line, 6);

    for record in result.records {
        ledger.add_record(record);
    }
    assert_eq!(ledger.records()[0].date, date("2021-06-05"));
    assert_eq!(ledger.week_total(), 7145.0);
    assert_eq!(ledger.check_limit(), -145.0);

    Ok(())
}

#[test]
fn test_import_quoted_comment_with_comma() -> Result<()> {
    let data = "amount,comment,date\n250,\"lunch, with dessert\",05.06.2021\n";
    let ledger = ledger_on("2021-06-05", 1000.0);
    let result = import_records_csv(data.as_bytes(), ledger.clock())?;

    assert!(result.errors.is_empty());
    assert_eq!(result.records[0].comment, "lunch, with dessert");

    Ok(())
}
