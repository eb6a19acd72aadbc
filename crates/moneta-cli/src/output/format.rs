const INDENT: &str = "  ";
const COLUMN_GAP: usize = 2;

pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

pub fn key_value_rows(entries: &[(&str, String)]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, value)| format!("{INDENT}{label:<label_width$}  {value}"))
        .collect()
}

/// Fixed-width table with a header row. Every column is left-aligned except
/// those named in `right_aligned`.
pub fn simple_table(headers: &[&str], rows: &[Vec<String>], right_aligned: &[&str]) -> Vec<String> {
    let mut widths = headers.iter().map(|header| header.len()).collect::<Vec<usize>>();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() && cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    let gap = " ".repeat(COLUMN_GAP);
    let mut output = Vec::with_capacity(rows.len() + 1);
    output.push(format_cells(
        headers,
        &headers
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<String>>(),
        &widths,
        right_aligned,
        &gap,
    ));
    for row in rows {
        output.push(format_cells(headers, row, &widths, right_aligned, &gap));
    }
    output
}

fn format_cells(
    headers: &[&str],
    cells: &[String],
    widths: &[usize],
    right_aligned: &[&str],
    gap: &str,
) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(0);
        let header = headers.get(index).copied().unwrap_or("");
        if right_aligned.contains(&header) {
            parts.push(format!("{cell:>width$}"));
        } else {
            parts.push(format!("{cell:<width$}"));
        }
    }
    let line = parts.join(gap);
    format!("{INDENT}{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::{format_money, key_value_rows, simple_table};

    #[test]
    fn money_keeps_two_decimals_and_sign() {
        assert_eq!(format_money(1070.0), "1070.00");
        assert_eq!(format_money(-30.5), "-30.50");
    }

    #[test]
    fn key_values_align_on_the_longest_label() {
        let rows = key_value_rows(&[
            ("Balance", "70.00".to_string()),
            ("Monthly spending", "30.00".to_string()),
        ]);
        assert_eq!(rows[0], "  Balance           70.00");
        assert_eq!(rows[1], "  Monthly spending  30.00");
    }

    #[test]
    fn tables_right_align_requested_columns() {
        let lines = simple_table(
            &["POS", "AMOUNT"],
            &[vec!["1".to_string(), "-4.50".to_string()]],
            &["AMOUNT"],
        );
        assert_eq!(lines[0], "  POS  AMOUNT");
        assert_eq!(lines[1], "  1     -4.50");
    }
}
