use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{columns, HospitalRow, RawRow, RawTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: found {found} fields, header has {expected}")]
    TooManyFields {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a hospital CSV from disk. The file handle is released on return.
pub fn load_file(path: &Path) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_reader(file)
}

/// Read a hospital CSV from any byte source.
pub fn load_reader<R: Read>(rdr: R) -> Result<RawTable, LoadError> {
    read_table(csv_builder().from_reader(rdr))
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers);
    builder
}

/// Layout: header row, then one hospital per line. Every column is kept
/// as text; coordinates are coerced later by the cleaner. Short rows are
/// padded with empty cells, so missing trailing coordinates surface as
/// unparseable values instead of a load failure.
fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<RawTable, LoadError> {
    let header_record = reader.headers()?.clone();
    let headers: Vec<String> = header_record.iter().map(str::to_string).collect();

    let mut table = RawTable {
        headers,
        rows: Vec::new(),
    };
    if let Some(missing) = columns::REQUIRED
        .into_iter()
        .find(|col| !table.has_column(col))
    {
        return Err(LoadError::MissingColumn(missing));
    }

    let width = header_record.len();
    for (row_no, result) in reader.records().enumerate() {
        let mut record = result?;
        if record.len() > width {
            return Err(LoadError::TooManyFields {
                row: row_no + 1,
                found: record.len(),
                expected: width,
            });
        }
        while record.len() < width {
            record.push_field("");
        }
        let fields: HospitalRow = record
            .deserialize(Some(&header_record))
            .map_err(|source| LoadError::Row {
                row: row_no + 1,
                source,
            })?;
        table.rows.push(RawRow {
            fields,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    log::debug!(
        "Read {} rows with columns {:?}",
        table.rows.len(),
        table.headers
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
Hospital Name,Services,Insurance Coverage,Hospital Type,Hospital Ownership,State,Latitude,Longitude
Mercy General,\"Cardiology, Oncology\",Aetna,Acute Care,Private,NY,40.71,-74.00
Lakeside,Pediatrics,,Critical Access,,CA,N/A,-118.2
";

    #[test]
    fn reads_rows_and_keeps_original_cells() {
        let table = load_reader(FULL.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 8);
        assert_eq!(table.rows.len(), 2);

        let first = &table.rows[0];
        assert_eq!(first.fields.name, "Mercy General");
        assert_eq!(first.fields.services, "Cardiology, Oncology");
        assert_eq!(first.fields.hospital_type.as_deref(), Some("Acute Care"));
        assert_eq!(first.cells[1], "Cardiology, Oncology");
        assert_eq!(first.cells.len(), 8);

        let second = &table.rows[1];
        assert_eq!(second.fields.ownership, None);
        assert_eq!(second.fields.insurance, "");
        assert_eq!(second.fields.latitude, "N/A");
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let csv = "State,Longitude,Latitude,Hospital Name,Services,Insurance Coverage\n\
                   TX,-97.7,30.2,Austin Central,Trauma,Cigna\n";
        let table = load_reader(csv.as_bytes()).unwrap();
        let row = &table.rows[0].fields;
        assert_eq!(row.hospital_type, None);
        assert_eq!(row.ownership, None);
        assert_eq!(row.latitude, "30.2");
        assert_eq!(row.state, "TX");
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let csv = " Hospital Name , Services,Insurance Coverage,State,Latitude,Longitude \n\
                   A,B,C,NY,1,2\n";
        let table = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].fields.name, "A");
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "Hospital Name,Services,Insurance Coverage,State,Latitude\nA,B,C,NY,1\n";
        match load_reader(csv.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Longitude"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn overlong_row_is_malformed() {
        let csv = "Hospital Name,Services,Insurance Coverage,State,Latitude,Longitude\n\
                   A,B,C,NY,1,2\n\
                   D,E,F,NY,1,2,extra\n";
        match load_reader(csv.as_bytes()) {
            Err(LoadError::TooManyFields {
                row,
                found,
                expected,
            }) => assert_eq!((row, found, expected), (2, 7, 6)),
            other => panic!("expected TooManyFields, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_padded_with_empty_cells() {
        let csv = "Hospital Name,Services,Insurance Coverage,State,Latitude,Longitude\n\
                   Short,Cardiology,Aetna,NY,40.7\n";
        let table = load_reader(csv.as_bytes()).unwrap();
        let row = &table.rows[0];
        assert_eq!(row.cells.len(), 6);
        assert_eq!(row.cells[5], "");
        assert_eq!(row.fields.latitude, "40.7");
        assert_eq!(row.fields.longitude, "");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
