use std::io;

use serde_json::Value;

use super::format::{format_money, key_value_rows, simple_table};
use super::import_text::metrics_rows;
use super::shared::{push_warnings, value_f64, value_i64, value_str};

pub fn render_ledger(data: &Value) -> io::Result<String> {
    let rows = data["rows"].as_array().cloned().unwrap_or_default();
    let total = value_i64(data, "total");
    let returned = value_i64(data, "returned");

    let mut lines = Vec::new();
    if total == 0 {
        lines.push("The ledger is empty. Run `moneta import <path>` to commit transactions.".to_string());
    } else {
        lines.push(format!("Recent transactions ({returned} of {total} shown):"));
        let table_rows = rows
            .iter()
            .map(|entry| {
                vec![
                    value_str(entry, "date"),
                    format_money(value_f64(entry, "amount")),
                    value_str(entry, "kind"),
                    value_str(entry, "category"),
                    value_str(entry, "description"),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(simple_table(
            &["DATE", "AMOUNT", "KIND", "CATEGORY", "DESCRIPTION"],
            &table_rows,
            &["AMOUNT"],
        ));
    }

    push_warnings(&mut lines, data);
    Ok(lines.join("\n"))
}

pub fn render_summary(data: &Value) -> io::Result<String> {
    let mut lines = vec!["Dashboard summary:".to_string()];
    lines.extend(metrics_rows(&data["metrics"]));
    lines.push(String::new());
    lines.extend(key_value_rows(&[
        ("Ledger entries", value_i64(data, "ledger_size").to_string()),
        ("Learned rules", value_i64(data, "rule_count").to_string()),
    ]));

    push_warnings(&mut lines, data);
    Ok(lines.join("\n"))
}

pub fn render_rules(data: &Value) -> io::Result<String> {
    let rows = data["rows"].as_array().cloned().unwrap_or_default();

    let mut lines = Vec::new();
    if rows.is_empty() {
        lines.push("No learned rules yet. Categories you confirm at import time land here.".to_string());
    } else {
        lines.push(format!("Learned rules ({}):", value_i64(data, "total")));
        let table_rows = rows
            .iter()
            .map(|rule| {
                vec![
                    value_str(rule, "merchant_key"),
                    value_str(rule, "category"),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(simple_table(&["MERCHANT KEY", "CATEGORY"], &table_rows, &[]));
    }

    push_warnings(&mut lines, data);
    Ok(lines.join("\n"))
}
