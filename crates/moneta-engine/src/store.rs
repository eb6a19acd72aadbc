//! Durable adapter for the rule store and dashboard state. Rules and
//! metrics live under fixed meta keys as minimal JSON; ledger entries are
//! rows, replaced wholesale inside the commit transaction (the cap keeps
//! that trivially small).

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};

use crate::contracts::types::StoreWarning;
use crate::error::{EngineError, EngineResult};
use crate::ledger::{AggregateMetrics, DashboardState, LedgerEntry};
use crate::migrations::{METRICS_META_KEY, RULES_META_KEY};
use crate::rules::{MemoryRuleStore, RuleSnapshot};
use crate::state::map_sqlite_error;

#[derive(Debug)]
pub struct LoadedState {
    pub rules: MemoryRuleStore,
    pub board: DashboardState,
    pub warnings: Vec<StoreWarning>,
}

/// Loads rules, metrics, and the ledger. A corrupt rules or metrics blob is
/// fail-soft: the value resets to empty/defaults and a warning is surfaced
/// instead of an error. Absence is a normal first run and stays silent.
pub fn load_state(connection: &Connection, db_path: &Path) -> EngineResult<LoadedState> {
    let mut warnings = Vec::new();

    let rules = match read_meta(connection, db_path, RULES_META_KEY)? {
        None => RuleSnapshot::new(),
        Some(raw) => match serde_json::from_str::<RuleSnapshot>(&raw) {
            Ok(parsed) => parsed,
            Err(_) => {
                warnings.push(StoreWarning {
                    code: "rules_reset".to_string(),
                    message: "Stored category rules were unreadable and were reset to empty."
                        .to_string(),
                });
                RuleSnapshot::new()
            }
        },
    };

    let metrics = match read_meta(connection, db_path, METRICS_META_KEY)? {
        None => AggregateMetrics::default(),
        Some(raw) => match serde_json::from_str::<AggregateMetrics>(&raw) {
            Ok(parsed) => parsed,
            Err(_) => {
                warnings.push(StoreWarning {
                    code: "metrics_reset".to_string(),
                    message: "Stored aggregate metrics were unreadable and were reset to zero."
                        .to_string(),
                });
                AggregateMetrics::default()
            }
        },
    };

    let ledger = read_ledger(connection, db_path)?;

    Ok(LoadedState {
        rules: MemoryRuleStore::from_snapshot(rules),
        board: DashboardState::new(ledger, metrics),
        warnings,
    })
}

/// Persists the post-commit state in one SQLite transaction: rules blob,
/// metrics blob, and the full (capped) ledger.
pub fn save_state(
    connection: &mut Connection,
    db_path: &Path,
    rules: &RuleSnapshot,
    board: &DashboardState,
) -> EngineResult<()> {
    let rules_json = serde_json::to_string(rules)
        .map_err(|error| EngineError::internal_serialization(&error.to_string()))?;
    let metrics_json = serde_json::to_string(&board.metrics)
        .map_err(|error| EngineError::internal_serialization(&error.to_string()))?;

    let transaction = connection
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    write_meta(&transaction, db_path, RULES_META_KEY, &rules_json)?;
    write_meta(&transaction, db_path, METRICS_META_KEY, &metrics_json)?;

    transaction
        .execute("DELETE FROM internal_ledger", [])
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    for (position, entry) in board.ledger.iter().enumerate() {
        transaction
            .execute(
                "INSERT INTO internal_ledger (
                    position,
                    txn_id,
                    description,
                    category,
                    amount,
                    posted_at,
                    committed_at
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    position as i64,
                    &entry.txn_id,
                    &entry.description,
                    &entry.category,
                    entry.amount,
                    &entry.date,
                    &entry.committed_at
                ],
            )
            .map_err(|error| map_sqlite_error(db_path, &error))?;
    }

    transaction
        .commit()
        .map_err(|error| map_sqlite_error(db_path, &error))
}

fn read_meta(connection: &Connection, db_path: &Path, key: &str) -> EngineResult<Option<String>> {
    connection
        .query_row(
            "SELECT value FROM internal_meta WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|error| map_sqlite_error(db_path, &error))
}

fn write_meta(
    transaction: &rusqlite::Transaction<'_>,
    db_path: &Path,
    key: &str,
    value: &str,
) -> EngineResult<()> {
    transaction
        .execute(
            "INSERT INTO internal_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    Ok(())
}

fn read_ledger(connection: &Connection, db_path: &Path) -> EngineResult<Vec<LedgerEntry>> {
    let mut statement = connection
        .prepare(
            "SELECT txn_id, description, category, amount, posted_at, committed_at
             FROM internal_ledger
             ORDER BY position ASC",
        )
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let rows_iter = statement
        .query_map([], |row| {
            Ok(LedgerEntry {
                txn_id: row.get(0)?,
                description: row.get(1)?,
                category: row.get(2)?,
                amount: row.get(3)?,
                date: row.get(4)?,
                committed_at: row.get(5)?,
            })
        })
        .map_err(|error| map_sqlite_error(db_path, &error))?;

    let mut entries = Vec::new();
    for row in rows_iter {
        entries.push(row.map_err(|error| map_sqlite_error(db_path, &error))?);
    }
    Ok(entries)
}
