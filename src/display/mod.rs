//! Display formatting for terminal output

pub mod expense;
pub mod limit;
pub mod status;

pub use expense::format_expense_list;
pub use limit::{format_limit_details, format_limit_list};
pub use status::{format_profile, format_status};
