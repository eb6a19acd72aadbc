pub mod classify;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod import;
pub mod ledger;
pub mod migrations;
pub mod rules;
pub mod session;
pub mod setup;
pub mod state;
pub mod store;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope, failure_from_error};
pub use error::{EngineError, EngineResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
