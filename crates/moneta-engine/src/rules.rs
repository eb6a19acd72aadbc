//! Learned merchant→category rules. The store is consulted before any
//! heuristic and is mutated exclusively through review-session commits.

use std::collections::BTreeMap;

/// Read-only view of the learned rules at one point in time. BTreeMap keeps
/// the serialized form stable, so identical rule sets serialize identically.
pub type RuleSnapshot = BTreeMap<String, String>;

/// Injectable rule repository. The classifier only ever sees a borrowed
/// snapshot; writers go through `put` during a commit.
pub trait RuleStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn put(&mut self, key: &str, category: &str);
    fn snapshot(&self) -> &RuleSnapshot;
}

/// In-memory rule store. Used directly in tests, and as the working copy of
/// the durable map loaded by the state store at startup.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleStore {
    rules: RuleSnapshot,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(rules: RuleSnapshot) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleStore for MemoryRuleStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.rules.get(key).map(String::as_str)
    }

    fn put(&mut self, key: &str, category: &str) {
        self.rules.insert(key.to_string(), category.to_string());
    }

    fn snapshot(&self) -> &RuleSnapshot {
        &self.rules
    }
}
