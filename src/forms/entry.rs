//! Expense and limit entry forms

use super::validation::{validate_amount, validate_description, validate_month};
use super::FormErrors;
use crate::error::{EconomyError, EconomyResult};
use crate::format::{format_currency_input, parse_currency_input};
use crate::models::{Expense, ExpenseUpdate, Limit, LimitUpdate, Money, MonthKey, NewExpense, NewLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExpenseField {
    Description,
    Amount,
    Month,
}

/// Expense entry (create or edit)
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub description: String,
    /// Formatted BRL text, e.g. `"12,50"`
    pub amount: String,
    /// `YYYY-MM`
    pub month: String,
    pub errors: FormErrors<ExpenseField>,
}

impl ExpenseForm {
    pub fn new(month: MonthKey) -> Self {
        Self {
            month: month.to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill for editing an existing record
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            amount: expense.amount.format_brl(),
            month: expense.month.to_string(),
            errors: FormErrors::default(),
        }
    }

    /// Set a field; amounts go through the keystroke formatter
    pub fn update_field(&mut self, field: ExpenseField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ExpenseField::Description => self.description = value,
            ExpenseField::Amount => self.amount = format_currency_input(&value),
            ExpenseField::Month => self.month = value,
        }
        self.errors.touch(field);
    }

    /// Set the amount from already formatted text, bypassing the keystroke mask
    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount = text.into();
        self.errors.touch(ExpenseField::Amount);
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        let description_ok = self.errors.check(
            ExpenseField::Description,
            validate_description(&self.description),
        );
        let amount_ok = self
            .errors
            .check(ExpenseField::Amount, validate_amount(&self.amount));
        let month_ok = self
            .errors
            .check(ExpenseField::Month, validate_month(&self.month));
        description_ok && amount_ok && month_ok
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.errors.set_general(message);
    }

    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.errors.clear();
    }

    pub fn to_request(&mut self) -> EconomyResult<NewExpense> {
        if !self.validate() {
            return Err(self.errors.to_error());
        }
        Ok(NewExpense {
            description: self.description.trim().to_string(),
            amount: parsed_amount(&self.amount)?,
            month: parsed_month(&self.month)?,
        })
    }

    pub fn to_update(&mut self) -> EconomyResult<ExpenseUpdate> {
        let request = self.to_request()?;
        Ok(ExpenseUpdate {
            description: request.description,
            amount: request.amount,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LimitField {
    Amount,
    Month,
}

/// Monthly limit entry (create or edit)
#[derive(Debug, Clone, Default)]
pub struct LimitForm {
    pub amount: String,
    pub month: String,
    pub errors: FormErrors<LimitField>,
}

impl LimitForm {
    pub fn new(month: MonthKey) -> Self {
        Self {
            month: month.to_string(),
            ..Self::default()
        }
    }

    pub fn from_limit(limit: &Limit) -> Self {
        Self {
            amount: limit.amount.format_brl(),
            month: limit.month.to_string(),
            errors: FormErrors::default(),
        }
    }

    pub fn update_field(&mut self, field: LimitField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LimitField::Amount => self.amount = format_currency_input(&value),
            LimitField::Month => self.month = value,
        }
        self.errors.touch(field);
    }

    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount = text.into();
        self.errors.touch(LimitField::Amount);
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        let amount_ok = self
            .errors
            .check(LimitField::Amount, validate_amount(&self.amount));
        let month_ok = self
            .errors
            .check(LimitField::Month, validate_month(&self.month));
        amount_ok && month_ok
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.errors.set_general(message);
    }

    pub fn clear(&mut self) {
        self.amount.clear();
        self.errors.clear();
    }

    pub fn to_request(&mut self) -> EconomyResult<NewLimit> {
        if !self.validate() {
            return Err(self.errors.to_error());
        }
        Ok(NewLimit {
            amount: parsed_amount(&self.amount)?,
            month: parsed_month(&self.month)?,
        })
    }

    pub fn to_update(&mut self) -> EconomyResult<LimitUpdate> {
        Ok(LimitUpdate {
            amount: self.to_request()?.amount,
        })
    }
}

fn parsed_amount(text: &str) -> EconomyResult<Money> {
    parse_currency_input(text).ok_or_else(|| EconomyError::validation("Invalid amount"))
}

fn parsed_month(text: &str) -> EconomyResult<MonthKey> {
    MonthKey::parse(text.trim()).map_err(|e| EconomyError::validation(e.to_string()))
}
