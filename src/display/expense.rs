//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{total_spent, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render expenses as a table with a total line
///
/// Records without an id show `-` and cannot be edited or deleted.
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: display_id(e.id),
            month: e.month.to_string(),
            description: e.description.clone(),
            amount: e.amount.format_with_symbol(symbol),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "Total: {} ({} expense{})\n",
        total_spent(expenses).format_with_symbol(symbol),
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" }
    ));

    if expenses.iter().any(|e| !e.can_modify()) {
        output.push_str("Records marked '-' have no id and are read-only.\n");
    }
    output
}

pub(crate) fn display_id(id: Option<u64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}
