use std::path::Path;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{RuleEntry, RulesData};
use crate::error::EngineResult;
use crate::rules::RuleStore;
use crate::setup::{ensure_initialized, ensure_initialized_at};
use crate::state::open_connection;
use crate::store;

#[derive(Debug, Default)]
pub struct RulesListOptions<'a> {
    pub home_override: Option<&'a Path>,
}

pub fn list() -> EngineResult<SuccessEnvelope> {
    list_with_options(RulesListOptions {
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: RulesListOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let setup = if let Some(path) = options.home_override {
        ensure_initialized_at(path)?
    } else {
        ensure_initialized()?
    };
    let connection = open_connection(&setup.db_path)?;
    let loaded = store::load_state(&connection, &setup.db_path)?;

    let rows = loaded
        .rules
        .snapshot()
        .iter()
        .map(|(merchant_key, category)| RuleEntry {
            merchant_key: merchant_key.clone(),
            category: category.clone(),
        })
        .collect::<Vec<RuleEntry>>();

    success(
        "rules list",
        RulesData {
            total: rows.len() as i64,
            rows,
            warnings: loaded.warnings,
        },
    )
}
