use std::path::Path;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{LedgerData, LedgerEntryView};
use crate::error::{EngineError, EngineResult};
use crate::ledger::{EntryKind, LedgerEntry, LedgerFilter, filter_entries};
use crate::setup::{ensure_initialized, ensure_initialized_at};
use crate::state::open_connection;
use crate::store;

#[derive(Debug, Default)]
pub struct LedgerListOptions<'a> {
    pub kind: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn list(
    kind: Option<String>,
    category: Option<String>,
    search: Option<String>,
) -> EngineResult<SuccessEnvelope> {
    list_with_options(LedgerListOptions {
        kind,
        category,
        search,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: LedgerListOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let filter = build_filter(&options)?;

    let setup = if let Some(path) = options.home_override {
        ensure_initialized_at(path)?
    } else {
        ensure_initialized()?
    };
    let connection = open_connection(&setup.db_path)?;
    let loaded = store::load_state(&connection, &setup.db_path)?;

    let filtered = filter_entries(&loaded.board.ledger, &filter);
    let rows = filtered.iter().map(|entry| entry_view(entry)).collect::<Vec<_>>();

    success(
        "ledger",
        LedgerData {
            total: loaded.board.ledger.len() as i64,
            returned: rows.len() as i64,
            rows,
            warnings: loaded.warnings,
        },
    )
}

fn build_filter(options: &LedgerListOptions<'_>) -> EngineResult<LedgerFilter> {
    let kind = match options.kind.as_deref() {
        None => None,
        Some(raw) => match EntryKind::parse(raw) {
            Some(parsed) => Some(parsed),
            None => {
                return Err(EngineError::invalid_argument_with_recovery(
                    &format!("Invalid kind `{raw}`. Supported values: income, expense."),
                    vec![
                        "Use `--kind income` or `--kind expense`.".to_string(),
                        "Run `moneta ledger --help` for usage.".to_string(),
                    ],
                ));
            }
        },
    };

    Ok(LedgerFilter {
        kind,
        category: options.category.clone(),
        search: options.search.clone(),
    })
}

fn entry_view(entry: &LedgerEntry) -> LedgerEntryView {
    LedgerEntryView {
        txn_id: entry.txn_id.clone(),
        description: entry.description.clone(),
        category: entry.category.clone(),
        amount: entry.amount,
        kind: entry.kind().as_str().to_string(),
        date: entry.date.clone(),
        committed_at: entry.committed_at.clone(),
    }
}
