//! Destination import
//!
//! Reads comma-separated destination records (`name,country,baseCost,description`)
//! and appends them to a catalog as plain destinations.
//!
//! Policy: records with fewer than 4 fields are skipped silently; a record
//! with 4 or more fields whose cost does not parse fails the whole import.
//! Nothing is appended to the catalog unless the entire source parses, so a
//! failed import never leaves the catalog partially extended.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::DestinationCatalog;
use crate::error::{TripError, TripResult};
use crate::models::{Destination, Money};

/// Import destinations from a reader, returning the number appended
///
/// # Errors
///
/// `Read` when a record cannot be decoded or a cost field in a well-formed
/// record is not a number.
pub fn import_records<R: Read>(catalog: &mut DestinationCatalog, reader: R) -> TripResult<usize> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut imported = Vec::new();

    for result in csv_reader.records() {
        let record = result.map_err(|e| TripError::Read(e.to_string()))?;

        // Short records are not destination lines; ignore them.
        if record.len() < 4 {
            continue;
        }

        let cost = Money::parse(&record[2]).map_err(|_| {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or_default();
            TripError::Read(format!(
                "Invalid cost '{}' on line {}",
                &record[2], line
            ))
        })?;

        // Fields past the description are ignored.
        imported.push(Destination::plain(&record[0], &record[1], cost, &record[3]));
    }

    let count = imported.len();
    for destination in imported {
        catalog.push(destination);
    }

    Ok(count)
}

/// Import destinations from a file path, returning the number appended
///
/// # Errors
///
/// `Read` when the file cannot be opened or any record fails to parse.
pub fn import_from_path<P: AsRef<Path>>(
    catalog: &mut DestinationCatalog,
    path: P,
) -> TripResult<usize> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| TripError::Read(format!("Failed to open {}: {}", path.display(), e)))?;

    import_records(catalog, BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_appends_plain_destination() {
        let mut catalog = DestinationCatalog::new();
        let count =
            import_records(&mut catalog, "Rome, Italy, 300.0, Ancient capital".as_bytes()).unwrap();

        assert_eq!(count, 1);
        assert_eq!(catalog.len(), 1);

        let rome = catalog.get(0).unwrap();
        assert_eq!(rome.name, "Rome");
        assert_eq!(rome.country, "Italy");
        assert_eq!(rome.base_cost, Money::from_major(300));
        assert_eq!(rome.description, "Ancient capital");
        assert_eq!(rome.kind, DestinationKind::Plain);
    }

    #[test]
    fn test_short_records_skipped_silently() {
        let mut catalog = DestinationCatalog::new();
        let source = "badline\nRome, Italy, 300.0, Ancient capital\nonly,three,fields\n";
        let count = import_records(&mut catalog, source.as_bytes()).unwrap();

        assert_eq!(count, 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "Rome");
    }

    #[test]
    fn test_bad_cost_fails_whole_import() {
        let mut catalog = DestinationCatalog::new();
        let source = "Rome, Italy, 300.0, Ancient capital\nOslo, Norway, cheap, Fjords\n";
        let err = import_records(&mut catalog, source.as_bytes()).unwrap_err();

        assert!(matches!(err, TripError::Read(_)));
        assert!(err.to_string().contains("cheap"));
        // The valid first record must not have been applied.
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut catalog = DestinationCatalog::new();
        let source = "Rome, Italy, 300.0, Ancient capital, extra, fields";
        import_records(&mut catalog, source.as_bytes()).unwrap();

        assert_eq!(catalog.get(0).unwrap().description, "Ancient capital");
    }

    #[test]
    fn test_import_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Rome, Italy, 300.0, Ancient capital").unwrap();
        writeln!(file, "Lisbon, Portugal, 250, Hills and tiles").unwrap();

        let mut catalog = DestinationCatalog::with_defaults();
        let count = import_from_path(&mut catalog, file.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get(7).unwrap().name, "Lisbon");
        assert_eq!(catalog.get(7).unwrap().base_cost, Money::from_major(250));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let mut catalog = DestinationCatalog::new();
        let err = import_from_path(&mut catalog, "/no/such/file.txt").unwrap_err();
        assert!(matches!(err, TripError::Read(_)));
    }
}
