use serde_json::Value;

pub fn value_str(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

pub fn value_i64(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or(0)
}

pub fn value_f64(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn push_warnings(lines: &mut Vec<String>, data: &Value) {
    let warnings = data
        .get("warnings")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if warnings.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("Warnings:".to_string());
    for warning in warnings {
        lines.push(format!(
            "  - {}: {}",
            value_str(&warning, "code"),
            value_str(&warning, "message")
        ));
    }
}
