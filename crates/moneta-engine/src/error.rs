use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

/// Single error currency of the engine. `code` is a stable machine-readable
/// identifier; `recovery_steps` are user-facing next actions.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EngineError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl EngineError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new(
            "invalid_argument",
            message,
            vec!["Run `moneta --help` for usage.".to_string()],
        )
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn ingestion_failed(path: &str, detail: &str) -> Self {
        Self::new(
            "ingestion_failed",
            &format!("Cannot read statement file `{path}`: {detail}"),
            vec![
                "Check that the path exists and the file is readable UTF-8 text.".to_string(),
                "Rerun `moneta import <path>` once the file is fixed.".to_string(),
            ],
        )
        .with_data(json!({ "path": path }))
    }

    pub fn import_in_progress() -> Self {
        Self::new(
            "import_in_progress",
            "A review batch is already pending; commit or cancel it before starting a new import.",
            vec![
                "Commit the pending batch, or".to_string(),
                "Cancel it to discard the pending candidates.".to_string(),
            ],
        )
    }

    pub fn candidate_not_found(id: &str) -> Self {
        Self::new(
            "candidate_not_found",
            &format!("No pending candidate matches `{id}`."),
            vec![
                "Use a row position from the reviewed batch (1-based).".to_string(),
                "Rerun with `--dry-run` to list the pending candidates first.".to_string(),
            ],
        )
        .with_data(json!({ "id": id }))
    }

    pub fn invalid_assignment(raw: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Assignment `{raw}` is not in POS=CATEGORY form."),
            vec![
                "Use a 1-based batch position and a non-empty category, e.g. `--assign 2=Dining`."
                    .to_string(),
                "Run `moneta import --help` for usage.".to_string(),
            ],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn store_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_permission_denied",
            &format!("Cannot initialize the dashboard store at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `MONETA_HOME` to a writable directory."
            )],
        )
    }

    pub fn store_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_locked",
            &format!("Dashboard store is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn store_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_corrupt",
            &format!("Dashboard store appears corrupt at `{location}`."),
            vec![format!(
                "Replace `{location}` with a valid SQLite store file or delete it to start fresh."
            )],
        )
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Dashboard store migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn store_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_failed",
            &format!("Dashboard store initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
