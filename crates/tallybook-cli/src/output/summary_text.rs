use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let stats = data
        .get("stats")
        .and_then(Value::as_object)
        .ok_or_else(|| io::Error::other("summary output requires stats"))?;

    let transaction_count = stats
        .get("transaction_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    if transaction_count == 0 {
        return Ok([
            "The ledger is empty.",
            "",
            "Bring in some data:",
            "  tallybook import <path>",
            "  tallybook add --help",
        ]
        .join("\n"));
    }

    let mut lines = vec!["Totals:".to_string()];
    lines.extend(format::key_value_rows(
        &[
            ("Revenue:", amount_field(stats, "total_revenue")),
            ("Expense:", amount_field(stats, "total_expense")),
            ("Net profit:", amount_field(stats, "net_profit")),
            ("Transactions:", transaction_count.to_string()),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("By month:".to_string());
    lines.extend(render_monthly_table(data));

    lines.extend(render_category_section(
        data,
        "top_expense_categories",
        "Top expense categories:",
    ));
    lines.extend(render_category_section(
        data,
        "top_revenue_categories",
        "Top revenue categories:",
    ));

    Ok(lines.join("\n"))
}

fn render_monthly_table(data: &Value) -> Vec<String> {
    let monthly = data
        .get("monthly")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if monthly.is_empty() {
        return vec!["  No rows with a month label yet.".to_string()];
    }

    let columns = [
        Column {
            name: "Month",
            align: Align::Left,
        },
        Column {
            name: "Revenue",
            align: Align::Right,
        },
        Column {
            name: "Expense",
            align: Align::Right,
        },
        Column {
            name: "Net",
            align: Align::Right,
        },
    ];

    let rows = monthly
        .iter()
        .map(|entry| {
            vec![
                entry
                    .get("month")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                format::format_amount(entry.get("revenue").and_then(Value::as_f64).unwrap_or(0.0)),
                format::format_amount(entry.get("expense").and_then(Value::as_f64).unwrap_or(0.0)),
                format::format_amount(
                    entry
                        .get("net_profit")
                        .and_then(Value::as_f64)
                        .unwrap_or(0.0),
                ),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table(&columns, &rows)
}

fn render_category_section(data: &Value, key: &str, heading: &str) -> Vec<String> {
    let categories = data
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut lines = vec![String::new(), heading.to_string()];
    if categories.is_empty() {
        lines.push("  None.".to_string());
        return lines;
    }

    let entries = categories
        .iter()
        .map(|entry| {
            let category = entry
                .get("category")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            let amount =
                format::format_amount(entry.get("amount").and_then(Value::as_f64).unwrap_or(0.0));
            (category, amount)
        })
        .collect::<Vec<(String, String)>>();

    let borrowed = entries
        .iter()
        .map(|(category, amount)| (category.as_str(), amount.clone()))
        .collect::<Vec<(&str, String)>>();
    lines.extend(format::key_value_rows(&borrowed, 2));

    lines
}

fn amount_field(stats: &serde_json::Map<String, Value>, key: &str) -> String {
    format::format_amount(stats.get(key).and_then(Value::as_f64).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_summary;

    #[test]
    fn empty_ledger_summary_guides_user() {
        let payload = json!({
            "stats": {
                "total_revenue": 0.0,
                "total_expense": 0.0,
                "net_profit": 0.0,
                "transaction_count": 0
            },
            "monthly": [],
            "top_expense_categories": [],
            "top_revenue_categories": []
        });

        let rendered = render_summary(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("The ledger is empty."));
        }
    }

    #[test]
    fn renders_totals_rollup_and_categories() {
        let payload = json!({
            "stats": {
                "total_revenue": 1500.0,
                "total_expense": 300.5,
                "net_profit": 1199.5,
                "transaction_count": 3
            },
            "monthly": [
                {"month": "January", "revenue": 1000.0, "expense": 300.5, "net_profit": 699.5},
                {"month": "March", "revenue": 500.0, "expense": 0.0, "net_profit": 500.0}
            ],
            "top_expense_categories": [
                {"category": "Rent", "amount": 300.5}
            ],
            "top_revenue_categories": [
                {"category": "Sales", "amount": 1500.0}
            ]
        });

        let rendered = render_summary(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Totals:"));
            assert!(text.contains("1,500.00"));
            assert!(text.contains("1,199.50"));
            assert!(text.contains("By month:"));
            assert!(text.contains("January"));
            assert!(text.contains("March"));
            assert!(text.contains("Top expense categories:"));
            assert!(text.contains("Rent"));
            assert!(text.contains("Top revenue categories:"));
            assert!(text.contains("Sales"));
        }
    }

    #[test]
    fn unlabeled_months_render_rollup_placeholder() {
        let payload = json!({
            "stats": {
                "total_revenue": 10.0,
                "total_expense": 0.0,
                "net_profit": 10.0,
                "transaction_count": 1
            },
            "monthly": [],
            "top_expense_categories": [],
            "top_revenue_categories": [
                {"category": "Sales", "amount": 10.0}
            ]
        });

        let rendered = render_summary(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("No rows with a month label yet."));
            assert!(text.contains("Top expense categories:\n  None."));
        }
    }
}
