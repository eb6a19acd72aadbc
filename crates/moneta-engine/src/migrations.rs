use rusqlite::Connection;
use rusqlite_migration::{M, Migrations};

const BOOTSTRAP_SQL: &str = include_str!("migrations/0001_bootstrap.sql");

/// Fixed meta key under which the learned rule map is serialized.
pub const RULES_META_KEY: &str = "category_rules";

/// Fixed meta key under which the aggregate metrics record is serialized.
pub const METRICS_META_KEY: &str = "aggregate_metrics";

pub fn run_pending(conn: &mut Connection) -> rusqlite_migration::Result<()> {
    let migrations = Migrations::new(vec![M::up(BOOTSTRAP_SQL)]);
    migrations.to_latest(conn)
}
