//! `economy status`

use crate::app::App;
use crate::display::format_status;
use crate::error::EconomyResult;
use crate::models::MonthKey;
use crate::services::classify;

pub async fn handle_status_command(app: &App, month: Option<MonthKey>) -> EconomyResult<()> {
    app.require_login()?;
    let month = month.unwrap_or_else(MonthKey::current);

    let expenses = app.expenses.list_by_month(&month).await?;
    let limit = app.limits.get_by_month(&month).await?;
    let status = classify(&expenses, limit.as_ref());

    if let Some(user) = app.session.session().user {
        println!("Hello, {}!", user.first_name());
    }
    print!("{}", format_status(&month, &status, &app.settings.currency_symbol));
    Ok(())
}
