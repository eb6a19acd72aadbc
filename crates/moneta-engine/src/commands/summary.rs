use std::path::Path;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;
use crate::error::EngineResult;
use crate::setup::{ensure_initialized, ensure_initialized_at};
use crate::state::open_connection;
use crate::store;

#[derive(Debug, Default)]
pub struct SummaryOptions<'a> {
    pub home_override: Option<&'a Path>,
}

pub fn run() -> EngineResult<SuccessEnvelope> {
    run_with_options(SummaryOptions {
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SummaryOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let setup = if let Some(path) = options.home_override {
        ensure_initialized_at(path)?
    } else {
        ensure_initialized()?
    };
    let connection = open_connection(&setup.db_path)?;
    let loaded = store::load_state(&connection, &setup.db_path)?;

    success(
        "summary",
        SummaryData {
            metrics: loaded.board.metrics.clone(),
            ledger_size: loaded.board.ledger.len() as i64,
            rule_count: loaded.rules.len() as i64,
            warnings: loaded.warnings,
        },
    )
}
