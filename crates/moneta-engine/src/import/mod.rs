//! Statement ingestion: raw delimited text → accepted canonical rows.
//!
//! Per-row failures are absorbed here and never escape as errors; only
//! whole-file read/decode failure is fatal.

pub(crate) mod columns;
pub(crate) mod parse;

use std::fs;

use crate::contracts::types::ImportReport;
use crate::error::{EngineError, EngineResult};
use crate::import::columns::resolve_columns;

/// Review batches hold at most this many candidates; later accepted rows
/// are dropped and the import report is marked truncated.
pub const REVIEW_BATCH_CAP: usize = 10;

/// Label used when a statement carries no recognizable date column.
pub const DATE_PLACEHOLDER: &str = "Unknown";

/// Canonical parser output for one accepted row, before classification.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub description: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub rows: Vec<ParsedRow>,
    pub report: ImportReport,
}

pub fn load_statement(path: &str) -> EngineResult<ParseOutcome> {
    let content =
        fs::read_to_string(path).map_err(|error| EngineError::ingestion_failed(path, &error.to_string()))?;
    parse_statement(&content)
}

pub fn parse_statement(content: &str) -> EngineResult<ParseOutcome> {
    let raw_rows = parse::parse_rows(content)?;
    let rows_read = raw_rows.len() as i64;

    let mut rows = Vec::new();
    let mut rows_rejected = 0_i64;
    let mut truncated = false;

    // Rejection is counted across the whole file; acceptable rows past the
    // cap are dropped and surface only through the truncated flag, so
    // rows_read = rows_accepted + rows_rejected + dropped-by-cap.
    for raw in &raw_rows {
        let resolved = resolve_columns(raw);
        let Some(amount) = parse_amount(resolved.amount.as_deref()) else {
            rows_rejected += 1;
            continue;
        };

        if rows.len() == REVIEW_BATCH_CAP {
            truncated = true;
            continue;
        }

        rows.push(ParsedRow {
            description: resolved.description.unwrap_or_default(),
            amount,
            date: resolved.date.unwrap_or_else(|| DATE_PLACEHOLDER.to_string()),
        });
    }

    let report = ImportReport {
        rows_read,
        rows_accepted: rows.len() as i64,
        rows_rejected,
        truncated,
    };

    Ok(ParseOutcome { rows, report })
}

/// Missing, non-numeric, non-finite, or exactly-zero amounts disqualify a
/// row. Rejection is silent; it only shows up in the report counts.
fn parse_amount(value: Option<&str>) -> Option<f64> {
    let candidate = value?.trim();
    if candidate.is_empty() {
        return None;
    }

    let amount = candidate.parse::<f64>().ok()?;
    if !amount.is_finite() || amount == 0.0 {
        return None;
    }
    Some(amount)
}

#[cfg(test)]
mod tests {
    use super::{DATE_PLACEHOLDER, REVIEW_BATCH_CAP, parse_statement};

    #[test]
    fn zero_and_non_numeric_amounts_never_become_candidates() {
        let content = "description,amount\nCoffee,-4.50\nVoid,0\nJunk,abc\nBlankless,\nSalary,1200\n";
        let outcome = parse_statement(content);
        assert!(outcome.is_ok());
        if let Ok(parsed) = outcome {
            assert_eq!(parsed.rows.len(), 2);
            assert_eq!(parsed.report.rows_read, 5);
            assert_eq!(parsed.report.rows_accepted, 2);
            assert_eq!(parsed.report.rows_rejected, 3);
            assert!(!parsed.report.truncated);
            assert!(parsed.rows.len() < parsed.report.rows_read as usize);
        }
    }

    #[test]
    fn accepted_rows_are_capped_and_later_rows_dropped() {
        let mut content = String::from("description,amount\n");
        for index in 0..(REVIEW_BATCH_CAP + 3) {
            content.push_str(&format!("Merchant {index},-1.00\n"));
        }

        let outcome = parse_statement(&content);
        assert!(outcome.is_ok());
        if let Ok(parsed) = outcome {
            assert_eq!(parsed.rows.len(), REVIEW_BATCH_CAP);
            assert!(parsed.report.truncated);
            assert_eq!(parsed.report.rows_rejected, 0);
            assert_eq!(parsed.rows[0].description, "Merchant 0");
        }
    }

    #[test]
    fn rejections_keep_counting_past_the_cap() {
        let mut content = String::from("description,amount\n");
        for index in 0..REVIEW_BATCH_CAP {
            content.push_str(&format!("Merchant {index},-1.00\n"));
        }
        content.push_str("Junk,abc\nLate merchant,-2.00\n");

        let outcome = parse_statement(&content);
        assert!(outcome.is_ok());
        if let Ok(parsed) = outcome {
            assert_eq!(parsed.report.rows_read, (REVIEW_BATCH_CAP + 2) as i64);
            assert_eq!(parsed.report.rows_accepted, REVIEW_BATCH_CAP as i64);
            assert_eq!(parsed.report.rows_rejected, 1);
            assert!(parsed.report.truncated);
        }
    }

    #[test]
    fn missing_date_column_falls_back_to_placeholder() {
        let outcome = parse_statement("Memo,Debit\nCoffee,-4.50\n");
        assert!(outcome.is_ok());
        if let Ok(parsed) = outcome {
            assert_eq!(parsed.rows[0].date, DATE_PLACEHOLDER);
            assert_eq!(parsed.rows[0].description, "Coffee");
        }
    }

    #[test]
    fn unreadable_file_is_the_only_fatal_condition() {
        let outcome = super::load_statement("/definitely/not/a/real/statement.csv");
        assert!(outcome.is_err());
        if let Err(error) = outcome {
            assert_eq!(error.code, "ingestion_failed");
        }
    }
}
