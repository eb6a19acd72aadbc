//! Pure category suggestion: learned rule, then income sign, then keyword
//! heuristics, then the uncategorized fallback.

use crate::rules::RuleSnapshot;

pub const INCOME_CATEGORY: &str = "Income";
pub const UNCATEGORIZED: &str = "Uncategorized";

struct KeywordGroup {
    category: &'static str,
    keywords: &'static [&'static str],
}

// Evaluated in declaration order; the first group with a matching keyword
// wins. Keywords are matched as substrings of the normalized description.
const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        category: "Groceries",
        keywords: &[
            "grocery",
            "supermarket",
            "whole foods",
            "trader joe",
            "kroger",
            "safeway",
            "aldi",
            "costco",
        ],
    },
    KeywordGroup {
        category: "Dining",
        keywords: &[
            "restaurant",
            "cafe",
            "coffee",
            "starbucks",
            "mcdonald",
            "pizza",
            "chipotle",
            "doordash",
            "grubhub",
        ],
    },
    KeywordGroup {
        category: "Transport",
        keywords: &[
            "uber",
            "lyft",
            "taxi",
            "shell",
            "chevron",
            "exxon",
            "gas station",
            "fuel",
            "parking",
            "transit",
            "metro",
        ],
    },
    KeywordGroup {
        category: "Shopping",
        keywords: &["amazon", "target", "ebay", "etsy", "best buy", "ikea"],
    },
    KeywordGroup {
        category: "Entertainment",
        keywords: &[
            "netflix", "spotify", "hulu", "disney", "cinema", "theater", "steam", "playstation",
        ],
    },
    KeywordGroup {
        category: "Utilities",
        keywords: &[
            "electric", "water", "internet", "comcast", "verizon", "utility", "phone bill",
        ],
    },
    KeywordGroup {
        category: "Housing",
        keywords: &["rent", "mortgage", "lease", "landlord"],
    },
    KeywordGroup {
        category: "Health",
        keywords: &["pharmacy", "cvs", "walgreens", "doctor", "dental", "clinic", "gym"],
    },
];

/// Normalizes a transaction description into the merchant key used for rule
/// lookup and storage. Trim + case-fold only, so repeated imports of the
/// same merchant converge on one rule.
pub fn normalize_merchant_key(description: &str) -> String {
    description.trim().to_lowercase()
}

/// Suggests a category for one transaction. Pure and deterministic.
///
/// Precedence is fixed: learned rule, then positive-amount-implies-income,
/// then keyword heuristic, then `Uncategorized`. A positive amount beats a
/// keyword match even when the description matches an expense group.
pub fn suggest_category(description: &str, amount: f64, snapshot: &RuleSnapshot) -> String {
    let key = normalize_merchant_key(description);

    if let Some(category) = snapshot.get(&key) {
        return category.to_string();
    }

    if amount > 0.0 {
        return INCOME_CATEGORY.to_string();
    }

    for group in KEYWORD_GROUPS {
        if group
            .keywords
            .iter()
            .any(|keyword| key.contains(keyword))
        {
            return group.category.to_string();
        }
    }

    UNCATEGORIZED.to_string()
}

#[cfg(test)]
mod tests {
    use crate::rules::RuleSnapshot;

    use super::{INCOME_CATEGORY, UNCATEGORIZED, normalize_merchant_key, suggest_category};

    #[test]
    fn merchant_key_is_stable_under_padding_and_case() {
        let samples = ["Shell", "uber ride", "  Whole Foods Market "];
        for sample in samples {
            let padded = format!("  {}  ", sample.to_uppercase());
            assert_eq!(normalize_merchant_key(sample), normalize_merchant_key(&padded));
        }
    }

    #[test]
    fn learned_rule_beats_keyword_tables() {
        let mut snapshot = RuleSnapshot::new();
        snapshot.insert("shell".to_string(), "Transport".to_string());
        assert_eq!(suggest_category("Shell  ", -40.0, &snapshot), "Transport");
    }

    #[test]
    fn positive_amount_beats_keyword_match() {
        let snapshot = RuleSnapshot::new();
        assert_eq!(
            suggest_category("Amazon Prime", 50.0, &snapshot),
            INCOME_CATEGORY
        );
    }

    #[test]
    fn keyword_fallback_applies_to_negative_amounts() {
        let snapshot = RuleSnapshot::new();
        assert_eq!(suggest_category("Uber ride", -12.5, &snapshot), "Transport");
    }

    #[test]
    fn unknown_negative_description_is_uncategorized() {
        let snapshot = RuleSnapshot::new();
        assert_eq!(suggest_category("XYZ Corp", -5.0, &snapshot), UNCATEGORIZED);
    }

    #[test]
    fn earliest_declared_group_wins_on_multiple_matches() {
        // "whole foods cafe" matches both Groceries and Dining; Groceries
        // is declared first.
        let snapshot = RuleSnapshot::new();
        assert_eq!(
            suggest_category("Whole Foods Cafe", -18.0, &snapshot),
            "Groceries"
        );
    }
}
