//! Status and profile display

use crate::models::{MonthKey, UserProfile};
use crate::services::{SpendingStatus, StatusKind};

const BAR_WIDTH: usize = 30;

/// Month summary with a progress bar when a limit is set
pub fn format_status(month: &MonthKey, status: &SpendingStatus, symbol: &str) -> String {
    let mut output = format!("{}\n", month.label());
    output.push_str(&format!("{}\n", status.message));

    match (status.kind, status.limit, status.progress()) {
        (StatusKind::OverLimit | StatusKind::UnderLimit, Some(limit), Some(progress)) => {
            output.push_str(&format!(
                "Progress: {} {}/{}\n",
                progress_bar(progress),
                status.total_spent.format_with_symbol(symbol),
                limit.format_with_symbol(symbol)
            ));
        }
        (StatusKind::ExpensesWithoutLimit, _, _) => {
            output.push_str(&format!(
                "Total spent: {}\n",
                status.total_spent.format_with_symbol(symbol)
            ));
        }
        _ => {}
    }
    output
}

fn progress_bar(progress: f64) -> String {
    let filled = (progress * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        progress * 100.0
    )
}

pub fn format_profile(user: &UserProfile) -> String {
    let mut output = format!("Name:  {}\nEmail: {}\n", user.name, user.email);
    if let Some(birth) = &user.birth_date {
        let shown = crate::format::iso_to_brazilian(birth).unwrap_or_else(|| birth.clone());
        output.push_str(&format!("Born:  {}\n", shown));
    }
    output
}
