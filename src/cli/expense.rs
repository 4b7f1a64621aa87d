//! Expense CLI commands

use clap::Subcommand;

use crate::app::App;
use crate::display::format_expense_list;
use crate::error::{EconomyError, EconomyResult};
use crate::forms::{ExpenseField, ExpenseForm};
use crate::models::MonthKey;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount, e.g. "12,50" or "2.130,00"
        amount: String,
        /// Reference month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// List expenses
    List {
        /// Reference month (YYYY-MM, defaults to the current month)
        #[arg(short, long, conflicts_with = "all")]
        month: Option<MonthKey>,
        /// List every expense
        #[arg(short, long)]
        all: bool,
    },
    /// Change an expense
    Update {
        /// Expense ID
        id: u64,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: u64,
    },
}

pub async fn handle_expense_command(app: &App, cmd: ExpenseCommands) -> EconomyResult<()> {
    app.require_login()?;

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            month,
        } => {
            let mut form = ExpenseForm::new(month.unwrap_or_else(MonthKey::current));
            form.update_field(ExpenseField::Description, description);
            form.set_amount_text(amount);
            let request = form.to_request()?;

            let created = app.expenses.create(&request).await?;
            println!("Added expense: {}", created.description);
            println!(
                "  Amount: {}",
                created.amount.format_with_symbol(&app.settings.currency_symbol)
            );
            println!("  Month:  {}", created.month.label());
            if let Some(id) = created.id {
                println!("  ID:     {}", id);
            }
        }

        ExpenseCommands::List { month, all } => {
            let expenses = if all {
                app.expenses.list_all().await?
            } else {
                let month = month.unwrap_or_else(MonthKey::current);
                println!("{}", month.label());
                app.expenses.list_by_month(&month).await?
            };
            print!("{}", format_expense_list(&expenses, &app.settings.currency_symbol));
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
        } => {
            if description.is_none() && amount.is_none() {
                println!("No changes specified. Use --description or --amount.");
                return Ok(());
            }

            // The backend replaces both fields, so start from the stored record
            let existing = app
                .expenses
                .list_all()
                .await?
                .into_iter()
                .find(|e| e.id == Some(id))
                .ok_or_else(|| EconomyError::NotFound(format!("Expense {} not found", id)))?;

            let mut form = ExpenseForm::from_expense(&existing);
            if let Some(description) = description {
                form.update_field(ExpenseField::Description, description);
            }
            if let Some(amount) = amount {
                form.set_amount_text(amount);
            }
            let update = form.to_update()?;

            let updated = app.expenses.update(existing.id, &update).await?;
            println!(
                "Updated expense: {} ({})",
                updated.description,
                updated.amount.format_with_symbol(&app.settings.currency_symbol)
            );
        }

        ExpenseCommands::Delete { id } => {
            let message = app.expenses.delete(Some(id)).await?;
            println!(
                "{}",
                message.unwrap_or_else(|| format!("Deleted expense {}", id))
            );
        }
    }

    Ok(())
}
