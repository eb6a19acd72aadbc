use serde::Serialize;

use crate::ledger::AggregateMetrics;

/// Per-file ingestion accounting. Row rejection is silent at the row level;
/// these counts are the only place it becomes observable. When `truncated`
/// is set, acceptable rows past the batch cap were dropped, so
/// `rows_read = rows_accepted + rows_rejected + dropped`.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub rows_read: i64,
    pub rows_accepted: i64,
    pub rows_rejected: i64,
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub position: i64,
    pub id: String,
    pub description: String,
    pub merchant_key: String,
    pub amount: f64,
    pub date: String,
    pub suggested_category: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitSummary {
    pub committed: i64,
    pub income_delta: f64,
    pub expense_delta: f64,
    pub rules_upserted: i64,
}

/// Non-fatal store condition surfaced alongside a successful command.
#[derive(Debug, Clone, Serialize)]
pub struct StoreWarning {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportData {
    pub dry_run: bool,
    pub path: String,
    pub message: String,
    pub report: ImportReport,
    pub batch: Vec<CandidateView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AggregateMetrics>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntryView {
    pub txn_id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub kind: String,
    pub date: String,
    pub committed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerData {
    pub total: i64,
    pub returned: i64,
    pub rows: Vec<LedgerEntryView>,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub metrics: AggregateMetrics,
    pub ledger_size: i64,
    pub rule_count: i64,
    pub warnings: Vec<StoreWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    pub merchant_key: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RulesData {
    pub total: i64,
    pub rows: Vec<RuleEntry>,
    pub warnings: Vec<StoreWarning>,
}
