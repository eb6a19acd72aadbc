use std::io;

use serde_json::Value;

use super::format::{format_money, key_value_rows, simple_table};
use super::shared::{push_warnings, value_f64, value_i64, value_str};

pub fn render_import_run(data: &Value) -> io::Result<String> {
    let mut lines = Vec::new();
    lines.push(value_str(data, "message"));
    lines.push(String::new());

    let report = &data["report"];
    let mut report_line = format!(
        "  Rows: {} read, {} accepted, {} rejected",
        value_i64(report, "rows_read"),
        value_i64(report, "rows_accepted"),
        value_i64(report, "rows_rejected"),
    );
    if report["truncated"].as_bool().unwrap_or(false) {
        report_line.push_str(" (batch truncated at the cap)");
    }
    lines.push(report_line);

    let batch = data["batch"].as_array().cloned().unwrap_or_default();
    if !batch.is_empty() {
        lines.push(String::new());
        lines.push("Reviewed batch:".to_string());
        let rows = batch
            .iter()
            .map(|candidate| {
                vec![
                    value_i64(candidate, "position").to_string(),
                    format_money(value_f64(candidate, "amount")),
                    value_str(candidate, "date"),
                    value_str(candidate, "suggested_category"),
                    value_str(candidate, "category"),
                    value_str(candidate, "description"),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(simple_table(
            &["POS", "AMOUNT", "DATE", "SUGGESTED", "CATEGORY", "DESCRIPTION"],
            &rows,
            &["POS", "AMOUNT"],
        ));
    }

    if let Some(commit) = data.get("commit").filter(|value| !value.is_null()) {
        lines.push(String::new());
        lines.push("Commit:".to_string());
        lines.extend(key_value_rows(&[
            ("Committed", value_i64(commit, "committed").to_string()),
            ("Income delta", format_money(value_f64(commit, "income_delta"))),
            (
                "Expense delta",
                format_money(value_f64(commit, "expense_delta")),
            ),
            (
                "Rules upserted",
                value_i64(commit, "rules_upserted").to_string(),
            ),
        ]));
    }

    if let Some(metrics) = data.get("metrics").filter(|value| !value.is_null()) {
        lines.push(String::new());
        lines.push("Metrics:".to_string());
        lines.extend(metrics_rows(metrics));
    }

    push_warnings(&mut lines, data);

    Ok(lines.join("\n"))
}

pub fn metrics_rows(metrics: &Value) -> Vec<String> {
    key_value_rows(&[
        (
            "Total balance",
            format_money(value_f64(metrics, "total_balance")),
        ),
        (
            "Monthly spending",
            format_money(value_f64(metrics, "monthly_spending")),
        ),
        (
            "Budget remaining",
            format_money(value_f64(metrics, "budget_remaining")),
        ),
        (
            "Savings goal",
            format_money(value_f64(metrics, "savings_goal")),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_import_run;

    #[test]
    fn renders_batch_commit_and_metrics_sections() {
        let data = json!({
            "message": "Committed 1 transaction(s).",
            "report": {"rows_read": 2, "rows_accepted": 1, "rows_rejected": 1, "truncated": false},
            "batch": [{
                "position": 1,
                "amount": -4.5,
                "date": "2026-01-02",
                "suggested_category": "Dining",
                "category": "Dining",
                "description": "Coffee"
            }],
            "commit": {"committed": 1, "income_delta": 0.0, "expense_delta": 4.5, "rules_upserted": 1},
            "metrics": {"total_balance": -4.5, "monthly_spending": 4.5, "budget_remaining": 0.0, "savings_goal": 0.0},
            "warnings": []
        });

        let rendered = render_import_run(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Committed 1 transaction(s)."));
            assert!(text.contains("Rows: 2 read, 1 accepted, 1 rejected"));
            assert!(text.contains("Reviewed batch:"));
            assert!(text.contains("Coffee"));
            assert!(text.contains("Monthly spending"));
        }
    }

    #[test]
    fn dry_run_omits_commit_section() {
        let data = json!({
            "message": "Dry run: suggestions computed, nothing was written.",
            "report": {"rows_read": 1, "rows_accepted": 1, "rows_rejected": 0, "truncated": false},
            "batch": [],
            "warnings": [{"code": "rules_reset", "message": "reset"}]
        });

        let rendered = render_import_run(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(!text.contains("Commit:"));
            assert!(text.contains("Warnings:"));
            assert!(text.contains("rules_reset"));
        }
    }
}
