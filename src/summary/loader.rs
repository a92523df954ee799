use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{PlateError, Result};
use crate::models::{DatasetRow, REQUIRED_COLUMNS};

/// Load dataset rows from a delimited file with a header line.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRow>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dataset");
    let file = File::open(path)?;
    read_rows(file)
}

/// Read dataset rows from any reader.
///
/// Extra columns are ignored. A missing required column fails the whole read;
/// a blank, non-numeric, NaN or infinite required cell fails with the offending
/// row number.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<DatasetRow>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_columns(&headers)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<DatasetRow>().enumerate() {
        let row = result.map_err(|e| PlateError::MalformedRow {
            row: i + 1,
            reason: e.to_string(),
        })?;

        if let Some(column) = row.non_finite_column() {
            return Err(PlateError::MalformedRow {
                row: i + 1,
                reason: format!("column {} is not a finite number", column),
            });
        }

        rows.push(row);
    }

    debug!(rows = rows.len(), "dataset loaded");
    Ok(rows)
}

/// Ensure every required column is present in the header.
pub fn check_columns(headers: &StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PlateError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_rows_ignores_extra_columns() {
        let data = "id,plate size,g.served,g.consumed,notes\n\
                    1,0,300,250,lunch\n\
                    2, 1 ,400,280,\n";

        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], DatasetRow::new(0.0, 300.0, 250.0));
        assert_eq!(rows[1], DatasetRow::new(1.0, 400.0, 280.0));
    }

    #[test]
    fn test_missing_column() {
        let data = "plate size,g.served\n0,300\n";
        match read_rows(data.as_bytes()) {
            Err(PlateError::MissingColumn(column)) => assert_eq!(column, "g.consumed"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_message() {
        let err = read_rows("g.served,g.consumed\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "cannot summarize: missing column plate size");
    }

    #[test]
    fn test_empty_input_reports_missing_column() {
        assert!(matches!(
            read_rows("".as_bytes()),
            Err(PlateError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let rows = read_rows("plate size,g.served,g.consumed\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_blank_cell_is_malformed() {
        let data = "plate size,g.served,g.consumed\n0,300,250\n1,,280\n";
        match read_rows(data.as_bytes()) {
            Err(PlateError::MalformedRow { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_cell_is_malformed() {
        let data = "plate size,g.served,g.consumed\n0,300,250\n0,NaN,250\n";
        match read_rows(data.as_bytes()) {
            Err(PlateError::MalformedRow { row, reason }) => {
                assert_eq!(row, 2);
                assert!(reason.contains("g.served"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_cell_is_malformed() {
        let data = "plate size,g.served,g.consumed\n0,300,250\n1,400,inf\n";
        match read_rows(data.as_bytes()) {
            Err(PlateError::MalformedRow { row, reason }) => {
                assert_eq!(row, 2);
                assert!(reason.contains("g.consumed"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"plate size,g.served,g.consumed\n1,410.5,300\n")
            .unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows, vec![DatasetRow::new(1.0, 410.5, 300.0)]);
    }

    #[test]
    fn test_load_rows_missing_file() {
        let result = load_rows("/nonexistent/plate_waste.csv");
        assert!(matches!(result, Err(PlateError::Io(_))));
    }
}
