use std::path::Path;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CandidateView, ImportData};
use crate::error::{EngineError, EngineResult};
use crate::import;
use crate::rules::RuleStore;
use crate::session::{Candidate, ReviewSession};
use crate::setup::{ensure_initialized, ensure_initialized_at};
use crate::state::open_connection;
use crate::store;

#[derive(Debug, Default)]
pub struct ImportRunOptions<'a> {
    pub path: String,
    pub dry_run: bool,
    /// Raw `POS=CATEGORY` review overrides, 1-based batch positions.
    pub assignments: Vec<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(path: String, dry_run: bool, assignments: Vec<String>) -> EngineResult<SuccessEnvelope> {
    run_with_options(ImportRunOptions {
        path,
        dry_run,
        assignments,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ImportRunOptions<'_>) -> EngineResult<SuccessEnvelope> {
    let assignments = parse_assignments(&options.assignments)?;

    let setup = load_setup(options.home_override)?;
    let mut connection = open_connection(&setup.db_path)?;
    let loaded = store::load_state(&connection, &setup.db_path)?;
    let mut rules = loaded.rules;
    let mut board = loaded.board;

    let outcome = import::load_statement(&options.path)?;
    let report = outcome.report;

    let mut session = ReviewSession::new();
    session.begin(outcome.rows, &rules)?;

    for (position, category) in &assignments {
        let id = candidate_id_at(session.candidates(), *position)?;
        session.set_category(&id, category)?;
    }

    let batch = candidate_views(session.candidates());

    if options.dry_run {
        session.cancel();
        let data = ImportData {
            dry_run: true,
            path: options.path,
            message: "Dry run: suggestions computed, nothing was written.".to_string(),
            report,
            batch,
            commit: None,
            metrics: None,
            warnings: loaded.warnings,
        };
        return success("import", data);
    }

    let summary = session.commit(&mut rules, &mut board);
    if summary.committed > 0 {
        store::save_state(&mut connection, &setup.db_path, rules.snapshot(), &board)?;
    }

    let message = if summary.committed == 0 {
        "No rows were accepted; nothing was committed.".to_string()
    } else {
        format!("Committed {} transaction(s).", summary.committed)
    };

    let data = ImportData {
        dry_run: false,
        path: options.path,
        message,
        report,
        batch,
        commit: Some(summary),
        metrics: Some(board.metrics.clone()),
        warnings: loaded.warnings,
    };
    success("import", data)
}

fn candidate_views(candidates: &[Candidate]) -> Vec<CandidateView> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| CandidateView {
            position: (index as i64) + 1,
            id: candidate.id.clone(),
            description: candidate.description.clone(),
            merchant_key: candidate.merchant_key.clone(),
            amount: candidate.amount,
            date: candidate.date.clone(),
            suggested_category: candidate.suggested_category.clone(),
            category: candidate.category.clone(),
        })
        .collect()
}

fn candidate_id_at(candidates: &[Candidate], position: usize) -> EngineResult<String> {
    if position == 0 || position > candidates.len() {
        return Err(EngineError::candidate_not_found(&position.to_string()));
    }
    Ok(candidates[position - 1].id.clone())
}

fn parse_assignments(raw_assignments: &[String]) -> EngineResult<Vec<(usize, String)>> {
    let mut assignments = Vec::with_capacity(raw_assignments.len());
    for raw in raw_assignments {
        let Some((position_part, category_part)) = raw.split_once('=') else {
            return Err(EngineError::invalid_assignment(raw));
        };
        let Ok(position) = position_part.trim().parse::<usize>() else {
            return Err(EngineError::invalid_assignment(raw));
        };
        let category = category_part.trim();
        if category.is_empty() {
            return Err(EngineError::invalid_assignment(raw));
        }
        assignments.push((position, category.to_string()));
    }
    Ok(assignments)
}

fn load_setup(home_override: Option<&Path>) -> EngineResult<crate::setup::SetupContext> {
    if let Some(path) = home_override {
        return ensure_initialized_at(path);
    }
    ensure_initialized()
}

#[cfg(test)]
mod tests {
    use super::parse_assignments;

    #[test]
    fn parses_position_category_pairs() {
        let parsed = parse_assignments(&["2=Dining".to_string(), "1 = Shopping".to_string()]);
        assert!(parsed.is_ok());
        if let Ok(assignments) = parsed {
            assert_eq!(assignments[0], (2, "Dining".to_string()));
            assert_eq!(assignments[1], (1, "Shopping".to_string()));
        }
    }

    #[test]
    fn rejects_malformed_assignments() {
        for raw in ["Dining", "x=Dining", "2=", "=Dining"] {
            let parsed = parse_assignments(&[raw.to_string()]);
            assert!(parsed.is_err(), "expected `{raw}` to be rejected");
        }
    }
}
