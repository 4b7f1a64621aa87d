//! Limit display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::expense::display_id;
use crate::models::Limit;

#[derive(Tabled)]
struct LimitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Limit")]
    amount: String,
}

pub fn format_limit_list(limits: &[Limit], symbol: &str) -> String {
    if limits.is_empty() {
        return "No limits found.\n".to_string();
    }

    let rows: Vec<LimitRow> = limits
        .iter()
        .map(|l| LimitRow {
            id: display_id(l.id),
            month: l.month.to_string(),
            label: l.month.label(),
            amount: l.amount.format_with_symbol(symbol),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    if limits.iter().any(|l| !l.can_modify()) {
        output.push_str("Records marked '-' have no id and are read-only.\n");
    }
    output
}

/// One month's limit
pub fn format_limit_details(limit: &Limit, symbol: &str) -> String {
    let mut output = format!(
        "Limit for {}: {}\n",
        limit.month.label(),
        limit.amount.format_with_symbol(symbol)
    );
    match limit.id {
        Some(id) => output.push_str(&format!("  ID: {}\n", id)),
        None => output.push_str("  ID: - (use `economy limit list` to find it)\n"),
    }
    output
}
