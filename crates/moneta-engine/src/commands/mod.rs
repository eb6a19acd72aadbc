pub mod import;
pub mod ledger;
pub mod rules;
pub mod summary;
