//! Column resolver: maps heterogeneous statement headers onto the canonical
//! transaction fields. Pure; absence is a value, never an error.

use crate::import::parse::RawRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CanonicalField {
    Amount,
    Description,
    Date,
}

struct ColumnSpec {
    canonical: CanonicalField,
    synonyms: &'static [&'static str],
}

// Ordered synonym lists; the first synonym carrying a non-blank value wins.
// Debit/Credit pairs commonly leave one column empty per row, which is why
// blank values fall through to the next synonym.
const COLUMN_SPECS: &[ColumnSpec] = &[
    ColumnSpec {
        canonical: CanonicalField::Amount,
        synonyms: &["amount", "Amount", "Debit", "Credit"],
    },
    ColumnSpec {
        canonical: CanonicalField::Description,
        synonyms: &["description", "Description", "Memo"],
    },
    ColumnSpec {
        canonical: CanonicalField::Date,
        synonyms: &["date", "Date"],
    },
];

#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedRow {
    pub(crate) amount: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) date: Option<String>,
}

pub(crate) fn resolve_columns(row: &RawRow) -> ResolvedRow {
    let mut resolved = ResolvedRow::default();
    for spec in COLUMN_SPECS {
        let value = first_match(row, spec.synonyms);
        match spec.canonical {
            CanonicalField::Amount => resolved.amount = value,
            CanonicalField::Description => resolved.description = value,
            CanonicalField::Date => resolved.date = value,
        }
    }
    resolved
}

fn first_match(row: &RawRow, synonyms: &[&str]) -> Option<String> {
    for synonym in synonyms {
        let hit = row
            .fields
            .iter()
            .find(|(header, value)| header == synonym && !value.trim().is_empty());
        if let Some((_, value)) = hit {
            return Some(value.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::import::parse::RawRow;

    use super::resolve_columns;

    fn raw(fields: &[(&str, &str)]) -> RawRow {
        RawRow {
            row: 1,
            fields: fields
                .iter()
                .map(|(header, value)| (header.to_string(), value.to_string()))
                .collect(),
        }
    }

    #[test]
    fn resolves_first_matching_synonym() {
        let row = raw(&[("Memo", "Coffee"), ("Amount", "-4.50"), ("Date", "2026-01-03")]);
        let resolved = resolve_columns(&row);
        assert_eq!(resolved.description.as_deref(), Some("Coffee"));
        assert_eq!(resolved.amount.as_deref(), Some("-4.50"));
        assert_eq!(resolved.date.as_deref(), Some("2026-01-03"));
    }

    #[test]
    fn blank_debit_falls_through_to_credit() {
        let row = raw(&[("Debit", ""), ("Credit", "120.00"), ("description", "Refund")]);
        let resolved = resolve_columns(&row);
        assert_eq!(resolved.amount.as_deref(), Some("120.00"));
    }

    #[test]
    fn lowercase_amount_header_wins_over_debit() {
        let row = raw(&[("amount", "-9.99"), ("Debit", "1.00")]);
        let resolved = resolve_columns(&row);
        assert_eq!(resolved.amount.as_deref(), Some("-9.99"));
    }

    #[test]
    fn absence_is_a_value_not_a_failure() {
        let row = raw(&[("Unrelated", "x")]);
        let resolved = resolve_columns(&row);
        assert!(resolved.amount.is_none());
        assert!(resolved.description.is_none());
        assert!(resolved.date.is_none());
    }
}
