//! Delimited-text parsing into untyped raw rows. The delimiter is sniffed
//! from the header line, so arbitrary bank exports (comma, semicolon, tab,
//! pipe) all land in the same pipeline.

use crate::error::{EngineError, EngineResult};

const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// One parsed line as an ordered header→value field map. Ephemeral:
/// discarded as soon as the column resolver has run.
#[derive(Debug, Clone)]
pub(crate) struct RawRow {
    pub(crate) row: i64,
    pub(crate) fields: Vec<(String, String)>,
}

pub(crate) fn parse_rows(content: &str) -> EngineResult<Vec<RawRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ingestion_error("Statement file is empty."));
    }

    let delimiter = sniff_delimiter(trimmed);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(trimmed.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| ingestion_error("Statement header row is missing or unreadable."))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    let mut rows = Vec::new();
    let mut row_number = 0_i64;
    for record_result in reader.records() {
        let record = record_result
            .map_err(|_| ingestion_error("Statement rows are malformed or not UTF-8."))?;

        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        row_number += 1;
        let fields = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let value = record.get(index).unwrap_or("").to_string();
                (header.clone(), value)
            })
            .collect::<Vec<(String, String)>>();
        rows.push(RawRow {
            row: row_number,
            fields,
        });
    }

    Ok(rows)
}

fn sniff_delimiter(content: &str) -> u8 {
    let Some(header_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return b',';
    };

    let mut best = b',';
    let mut best_count = 0_usize;
    for candidate in CANDIDATE_DELIMITERS {
        let count = header_line.bytes().filter(|byte| *byte == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

fn ingestion_error(detail: &str) -> EngineError {
    EngineError::new(
        "ingestion_failed",
        detail,
        vec![
            "Provide delimited text with a header row.".to_string(),
            "Rerun `moneta import <path>` once the file is fixed.".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::{parse_rows, sniff_delimiter};

    #[test]
    fn parses_comma_delimited_rows_with_headers() {
        let rows = parse_rows("date,description,amount\n2026-01-02,Coffee,-4.50\n");
        assert!(rows.is_ok());
        if let Ok(parsed) = rows {
            assert_eq!(parsed.len(), 1);
            assert_eq!(parsed[0].fields[1], ("description".to_string(), "Coffee".to_string()));
        }
    }

    #[test]
    fn sniffs_semicolon_and_pipe_delimiters() {
        assert_eq!(sniff_delimiter("date;description;amount"), b';');
        assert_eq!(sniff_delimiter("date|description|amount"), b'|');
        assert_eq!(sniff_delimiter("date\tdescription\tamount"), b'\t');
        assert_eq!(sniff_delimiter("date,description,amount"), b',');
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_rows("description,amount\nCoffee,-4.50\n,\n\nTea,-3.00\n");
        assert!(rows.is_ok());
        if let Ok(parsed) = rows {
            assert_eq!(parsed.len(), 2);
            assert_eq!(parsed[1].row, 2);
        }
    }

    #[test]
    fn empty_content_is_an_ingestion_error() {
        let rows = parse_rows("   \n  ");
        assert!(rows.is_err());
        if let Err(error) = rows {
            assert_eq!(error.code, "ingestion_failed");
        }
    }

    #[test]
    fn short_records_resolve_missing_cells_as_empty() {
        let rows = parse_rows("description,amount,date\nCoffee,-4.50\n");
        assert!(rows.is_ok());
        if let Ok(parsed) = rows {
            assert_eq!(parsed[0].fields[2], ("date".to_string(), String::new()));
        }
    }
}
