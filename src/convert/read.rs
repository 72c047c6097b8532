// src/convert/read.rs

use csv::ReaderBuilder;
use std::{fs, io, path::Path};
use tracing::{debug, instrument, warn};

use crate::error::{ConversionError, ReadFault};
use crate::record::{Dataset, Record};

/// Read the whole of `path` as UTF-8 and parse it into a `Dataset`.
///
/// The file handle is closed before this returns, whatever the outcome.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_dataset(path: &Path) -> Result<Dataset, ConversionError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConversionError::SourceNotFound {
            path: path.to_path_buf(),
            source: e,
        },
        _ => ConversionError::SourceRead {
            path: path.to_path_buf(),
            source: ReadFault::Io(e),
        },
    })?;
    debug!(bytes = text.len(), "read source");

    parse_dataset(&text).map_err(|source| ConversionError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse delimited text: first row is the header, every later row a record.
///
/// - a leading byte-order mark is dropped
/// - blank lines produce no record
/// - short rows are padded with empty values
/// - rows longer than the header are rejected
pub fn parse_dataset(text: &str) -> Result<Dataset, ReadFault> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // field counts are checked below, with line numbers
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    debug!(columns = ?headers, "parsed header");

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());

        if row.len() > headers.len() {
            return Err(ReadFault::TooManyFields {
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }
        if row.len() < headers.len() {
            warn!(
                line,
                found = row.len(),
                expected = headers.len(),
                "short row; padding missing fields with empty values"
            );
        }

        records.push(Record::from_row(&headers, row.iter()));
    }

    debug!(records = records.len(), "parsed records");
    Ok(Dataset::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const CANONICAL: &str = "dataYear,dataset,tableGroup,geographyID
2023,acs1,B01001,050XX00US18039
2023,acs1,DP02,160XX00US0410670
2023,acs5,S0101,010XX00US
";

    #[test]
    fn test_parse_canonical_example() -> Result<()> {
        let ds = parse_dataset(CANONICAL)?;

        assert_eq!(
            ds.columns(),
            &["dataYear", "dataset", "tableGroup", "geographyID"]
        );
        assert_eq!(ds.len(), 3);
        let groups: Vec<_> = ds
            .records()
            .iter()
            .map(|r| r.get("tableGroup").unwrap())
            .collect();
        assert_eq!(groups, vec!["B01001", "DP02", "S0101"]);
        assert_eq!(ds.records()[2].get("geographyID"), Some("010XX00US"));
        Ok(())
    }

    #[test]
    fn test_quoted_comma_newline_and_doubled_quote() -> Result<()> {
        let text = "dataYear,dataset,tableGroup,geographyID
2023,acs1,\"B01001, Part A\",050XX00US18039
2023,acs1,\"two
lines\",\"say \"\"hi\"\"\"
";
        let ds = parse_dataset(text)?;

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].get("tableGroup"), Some("B01001, Part A"));
        assert_eq!(ds.records()[1].get("tableGroup"), Some("two\nlines"));
        assert_eq!(ds.records()[1].get("geographyID"), Some("say \"hi\""));
        Ok(())
    }

    #[test]
    fn test_short_row_is_padded() -> Result<()> {
        let ds = parse_dataset("a,b,c\n1,2\n")?;
        let rec = &ds.records()[0];
        assert_eq!(rec.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(rec.get("c"), Some(""));
        Ok(())
    }

    #[test]
    fn test_long_row_is_rejected_with_line() {
        let err = parse_dataset("a,b\n1,2\n3,4,5\n").unwrap_err();
        match err {
            ReadFault::TooManyFields {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_and_bom() -> Result<()> {
        let ds = parse_dataset("\u{feff}year,set\n2023,acs1\n\n2022,acs5\n")?;
        assert_eq!(ds.columns(), &["year", "set"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].get("year"), Some("2022"));
        Ok(())
    }

    #[test]
    fn test_header_only_and_empty_text_have_no_records() -> Result<()> {
        assert!(parse_dataset("")?.is_empty());
        assert!(parse_dataset("dataYear,dataset,tableGroup,geographyID\n")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_not_found() -> Result<()> {
        let dir = tempdir()?;
        let err = read_dataset(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ConversionError::SourceNotFound { .. }));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_read_error() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"a,b\n\xff\xfe,2\n")?;
        let err = read_dataset(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::SourceRead {
                source: ReadFault::Io(_),
                ..
            }
        ));
        Ok(())
    }
}
