//! Backend endpoint paths, relative to the `/api` base URL

use crate::models::MonthKey;

pub const SIGNUP: &str = "/auth/signup";
pub const SIGNIN: &str = "/auth/signin";
/// Token check; its 401s are handled by the session controller
pub const PROFILE: &str = "/auth/profile";

pub const EXPENSE: &str = "/despesa";
pub const EXPENSES: &str = "/despesas";

pub const LIMIT: &str = "/limite";
pub const LIMITS: &str = "/limites";

pub fn expense(id: u64) -> String {
    format!("{}/{}", EXPENSE, id)
}

pub fn expenses_by_month(month: &MonthKey) -> String {
    format!("{}/mes/{}", EXPENSE, month)
}

pub fn limit(id: u64) -> String {
    format!("{}/{}", LIMIT, id)
}

pub fn limit_by_month(month: &MonthKey) -> String {
    format!("{}/mes/{}", LIMIT, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let month = MonthKey::parse("2025-04").unwrap();
        assert_eq!(expenses_by_month(&month), "/despesa/mes/2025-04");
        assert_eq!(limit_by_month(&month), "/limite/mes/2025-04");
        assert_eq!(expense(12), "/despesa/12");
        assert_eq!(limit(3), "/limite/3");
    }
}
