//! Ledger and aggregate metrics: owned by the dashboard state, written only
//! by review-session commits.

use serde::{Deserialize, Serialize};

/// The ledger retains this many committed transactions, newest-first.
pub const LEDGER_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub txn_id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub committed_at: String,
}

impl LedgerEntry {
    pub fn kind(&self) -> EntryKind {
        if self.amount > 0.0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// Running totals. Updated by signed deltas at commit time, never
/// recomputed from the capped ledger. `budget_remaining` and
/// `savings_goal` are carried values a commit leaves untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub total_balance: f64,
    pub monthly_spending: f64,
    pub budget_remaining: f64,
    pub savings_goal: f64,
}

/// In-memory dashboard state: the capped ledger plus aggregate metrics.
/// Sole writer is `apply_commit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub ledger: Vec<LedgerEntry>,
    pub metrics: AggregateMetrics,
}

impl DashboardState {
    pub fn new(ledger: Vec<LedgerEntry>, metrics: AggregateMetrics) -> Self {
        Self { ledger, metrics }
    }

    /// Prepends committed entries in batch order, truncates to the cap, and
    /// applies the signed aggregate deltas.
    pub fn apply_commit(&mut self, entries: Vec<LedgerEntry>, income_delta: f64, expense_delta: f64) {
        let mut merged = entries;
        merged.append(&mut self.ledger);
        merged.truncate(LEDGER_CAP);
        self.ledger = merged;

        self.metrics.total_balance += income_delta - expense_delta;
        self.metrics.monthly_spending += expense_delta;
    }
}

/// Presentation-boundary filter over the read-only ledger: by kind, by
/// category, and free-text search over the description.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    pub kind: Option<EntryKind>,
    pub category: Option<String>,
    pub search: Option<String>,
}

pub fn filter_entries<'a>(entries: &'a [LedgerEntry], filter: &LedgerFilter) -> Vec<&'a LedgerEntry> {
    entries
        .iter()
        .filter(|entry| {
            if let Some(kind) = filter.kind
                && entry.kind() != kind
            {
                return false;
            }
            if let Some(category) = &filter.category
                && !entry.category.eq_ignore_ascii_case(category)
            {
                return false;
            }
            if let Some(search) = &filter.search {
                let needle = search.to_lowercase();
                if !entry.description.to_lowercase().contains(&needle) {
                    return false;
                }
            }
            true
        })
        .collect()
}
