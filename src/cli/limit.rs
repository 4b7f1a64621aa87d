//! Limit CLI commands

use clap::Subcommand;

use crate::app::App;
use crate::display::{format_limit_details, format_limit_list};
use crate::error::EconomyResult;
use crate::forms::LimitForm;
use crate::models::MonthKey;

/// Limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the spending limit for a month
    Set {
        /// Amount, e.g. "1.500,00"
        amount: String,
        /// Reference month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// Show the limit of a month
    Show {
        /// Reference month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// List every limit
    List,
    /// Change a limit
    Update {
        /// Limit ID
        id: u64,
        /// New amount
        amount: String,
    },
    /// Delete a limit
    Delete {
        /// Limit ID
        id: u64,
    },
}

pub async fn handle_limit_command(app: &App, cmd: LimitCommands) -> EconomyResult<()> {
    app.require_login()?;

    match cmd {
        LimitCommands::Set { amount, month } => {
            let mut form = LimitForm::new(month.unwrap_or_else(MonthKey::current));
            form.set_amount_text(amount);
            let request = form.to_request()?;

            let created = app.limits.create(&request).await?;
            print!("{}", format_limit_details(&created, &app.settings.currency_symbol));
        }

        LimitCommands::Show { month } => {
            let month = month.unwrap_or_else(MonthKey::current);
            match app.limits.get_by_month(&month).await? {
                Some(limit) => {
                    print!("{}", format_limit_details(&limit, &app.settings.currency_symbol))
                }
                None => println!("No limit set for {}.", month.label()),
            }
        }

        LimitCommands::List => {
            let limits = app.limits.list_all().await?;
            print!("{}", format_limit_list(&limits, &app.settings.currency_symbol));
        }

        LimitCommands::Update { id, amount } => {
            let mut form = LimitForm::new(MonthKey::current());
            form.set_amount_text(amount);
            let update = form.to_update()?;

            let updated = app.limits.update(Some(id), &update).await?;
            print!("{}", format_limit_details(&updated, &app.settings.currency_symbol));
        }

        LimitCommands::Delete { id } => {
            let message = app.limits.delete(Some(id)).await?;
            println!("{}", message.unwrap_or_else(|| format!("Deleted limit {}", id)));
        }
    }

    Ok(())
}
