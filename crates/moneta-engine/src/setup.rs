use std::path::{Path, PathBuf};

use crate::migrations::run_pending;
use crate::state::{
    ensure_store_directory, map_sqlite_error, open_connection, resolve_store_home, store_db_path,
};
use crate::{EngineError, EngineResult};

#[derive(Debug, Clone)]
pub struct SetupContext {
    pub home: PathBuf,
    pub db_path: PathBuf,
}

pub fn ensure_initialized() -> EngineResult<SetupContext> {
    ensure_initialized_with_home_override(None)
}

pub fn ensure_initialized_at(home_override: &Path) -> EngineResult<SetupContext> {
    ensure_initialized_with_home_override(Some(home_override))
}

fn ensure_initialized_with_home_override(
    home_override: Option<&Path>,
) -> EngineResult<SetupContext> {
    let home = resolve_store_home(home_override)?;
    ensure_store_directory(&home)?;

    let db_path = store_db_path(&home);
    let mut connection = open_connection(&db_path)?;
    run_pending(&mut connection).map_err(|error| map_migration_error(&db_path, &error))?;

    Ok(SetupContext { home, db_path })
}

fn map_migration_error(db_path: &Path, error: &rusqlite_migration::Error) -> EngineError {
    match error {
        rusqlite_migration::Error::RusqliteError { query: _, err } => {
            let mapped = map_sqlite_error(db_path, err);
            if mapped.code == "store_locked"
                || mapped.code == "store_corrupt"
                || mapped.code == "store_init_permission_denied"
            {
                mapped
            } else {
                EngineError::migration_failed(db_path, &error.to_string())
            }
        }
        _ => EngineError::migration_failed(db_path, &error.to_string()),
    }
}
