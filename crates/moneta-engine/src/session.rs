//! Review session: the capped batch of classified candidates awaiting user
//! confirmation. State machine: Empty → Populated → {commit, cancel} → Empty.

use chrono::Utc;
use ulid::Ulid;

use crate::classify::{normalize_merchant_key, suggest_category};
use crate::contracts::types::CommitSummary;
use crate::error::{EngineError, EngineResult};
use crate::import::ParsedRow;
use crate::ledger::{DashboardState, LedgerEntry};
use crate::rules::RuleStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Populated,
}

/// One parsed-but-unconfirmed transaction. `suggested_category` is the
/// original machine suggestion, kept for audit; only `category` is mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub description: String,
    pub merchant_key: String,
    pub amount: f64,
    pub date: String,
    pub suggested_category: String,
    pub category: String,
}

#[derive(Debug, Default)]
pub struct ReviewSession {
    batch: Vec<Candidate>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.batch.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Populated
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.batch
    }

    /// Populates the batch from parser output, classifying each row against
    /// the current rule snapshot. Rejected while a batch is already pending;
    /// the caller must commit or cancel first.
    pub fn begin(&mut self, rows: Vec<ParsedRow>, rules: &dyn RuleStore) -> EngineResult<&[Candidate]> {
        if self.phase() == SessionPhase::Populated {
            return Err(EngineError::import_in_progress());
        }

        let snapshot = rules.snapshot();
        self.batch = rows
            .into_iter()
            .map(|row| {
                let suggested = suggest_category(&row.description, row.amount, snapshot);
                Candidate {
                    id: format!("cand_{}", Ulid::new()),
                    merchant_key: normalize_merchant_key(&row.description),
                    description: row.description,
                    amount: row.amount,
                    date: row.date,
                    category: suggested.clone(),
                    suggested_category: suggested,
                }
            })
            .collect();

        Ok(&self.batch)
    }

    /// Overrides a single candidate's category. Never touches the original
    /// suggestion or the rule store.
    pub fn set_category(&mut self, id: &str, category: &str) -> EngineResult<()> {
        let candidate = self
            .batch
            .iter_mut()
            .find(|candidate| candidate.id == id)
            .ok_or_else(|| EngineError::candidate_not_found(id))?;
        candidate.category = category.to_string();
        Ok(())
    }

    /// Atomically folds the batch into the rule store, the ledger, and the
    /// aggregate metrics, then returns to Empty. Committing an empty batch
    /// is a no-op, not an error.
    pub fn commit(&mut self, rules: &mut dyn RuleStore, board: &mut DashboardState) -> CommitSummary {
        if self.batch.is_empty() {
            return CommitSummary {
                committed: 0,
                income_delta: 0.0,
                expense_delta: 0.0,
                rules_upserted: 0,
            };
        }

        let batch = std::mem::take(&mut self.batch);
        let committed_at = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let mut income_delta = 0.0;
        let mut expense_delta = 0.0;
        let mut entries = Vec::with_capacity(batch.len());

        for candidate in &batch {
            rules.put(&candidate.merchant_key, &candidate.category);

            if candidate.amount > 0.0 {
                income_delta += candidate.amount;
            } else {
                expense_delta += candidate.amount.abs();
            }

            entries.push(LedgerEntry {
                txn_id: format!("txn_{}", Ulid::new()),
                description: candidate.description.clone(),
                category: candidate.category.clone(),
                amount: candidate.amount,
                date: candidate.date.clone(),
                committed_at: committed_at.clone(),
            });
        }

        board.apply_commit(entries, income_delta, expense_delta);

        CommitSummary {
            committed: batch.len() as i64,
            income_delta,
            expense_delta,
            rules_upserted: batch.len() as i64,
        }
    }

    /// Discards the batch unchanged. No mutation to the rule store, the
    /// ledger, or the aggregates.
    pub fn cancel(&mut self) {
        self.batch.clear();
    }
}
