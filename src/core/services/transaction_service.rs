//! Business logic helpers for managing recurring transactions.

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::domain::{is_valid_day, BudgetState, Transaction, TransactionKind};
use crate::errors::{BudgetError, Result};
use crate::period::{map_transaction_date, resolve_period};

/// Raw user input for creating or editing a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub title: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub day_of_month: u32,
}

impl TransactionInput {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        day_of_month: u32,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            kind,
            day_of_month,
        }
    }

    /// Builds an input from form text, rejecting non-numeric amounts and days.
    pub fn parse(title: &str, amount: &str, kind: &str, day_of_month: &str) -> Result<Self> {
        let amount_text = amount.trim();
        let amount = amount_text.parse::<f64>().map_err(|_| {
            BudgetError::Validation(format!("amount `{amount_text}` is not a number"))
        })?;
        let kind = kind.parse::<TransactionKind>().map_err(BudgetError::Validation)?;
        let day_text = day_of_month.trim();
        let day_of_month = day_text.parse::<u32>().map_err(|_| {
            BudgetError::Validation(format!("day `{day_text}` is not a day of the month"))
        })?;
        Ok(Self::new(title, amount, kind, day_of_month))
    }

    /// Checks amount and day and substitutes `placeholder` for a blank title.
    pub fn validate(self, placeholder: &str) -> Result<Self> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(BudgetError::Validation(format!(
                "amount {} must be a positive number",
                self.amount
            )));
        }
        if !is_valid_day(self.day_of_month) {
            return Err(BudgetError::Validation(format!(
                "day {} must be between 1 and 31",
                self.day_of_month
            )));
        }
        let title = match self.title.trim() {
            "" => placeholder.to_string(),
            trimmed => trimmed.to_string(),
        };
        Ok(Self { title, ..self })
    }
}

/// Provides validated CRUD helpers for the transaction collection.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    ///
    /// With `auto_settle_elapsed` enabled, a transaction whose date in the current
    /// period is on or before `today` starts out settled.
    pub fn add(
        state: &mut BudgetState,
        input: TransactionInput,
        today: NaiveDate,
        config: &AppConfig,
    ) -> Result<String> {
        let input = input.validate(&config.placeholder_title)?;
        let start_day = state.settings.start_day;
        let settled = config.auto_settle_elapsed && {
            let period = resolve_period(today, start_day);
            map_transaction_date(input.day_of_month, &period, start_day) <= today
        };

        let transaction =
            Transaction::new(input.title, input.amount, input.kind, input.day_of_month)
                .with_settled(settled);
        let id = transaction.id.clone();
        tracing::debug!(id = %id, settled, "transaction added");
        state.transactions.push(transaction);
        Ok(id)
    }

    /// Replaces title, amount, kind and day of an existing transaction.
    /// Settlement is left as it was.
    pub fn edit(
        state: &mut BudgetState,
        id: &str,
        input: TransactionInput,
        placeholder: &str,
    ) -> Result<()> {
        let input = input.validate(placeholder)?;
        Self::update(state, id, |txn| {
            txn.title = input.title;
            txn.amount = input.amount;
            txn.kind = input.kind;
            txn.day_of_month = input.day_of_month;
        })
    }

    /// Flips the settlement flag and returns the new value.
    pub fn toggle_settled(state: &mut BudgetState, id: &str) -> Result<bool> {
        let mut settled = false;
        Self::update(state, id, |txn| {
            txn.settled = !txn.settled;
            settled = txn.settled;
        })?;
        Ok(settled)
    }

    pub fn find<'a>(state: &'a BudgetState, id: &str) -> Result<&'a Transaction> {
        state
            .transaction(id)
            .ok_or_else(|| BudgetError::TransactionNotFound(id.to_string()))
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    pub fn update<F>(state: &mut BudgetState, id: &str, mutator: F) -> Result<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let txn = state
            .transaction_mut(id)
            .ok_or_else(|| BudgetError::TransactionNotFound(id.to_string()))?;
        mutator(txn);
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(state: &mut BudgetState, id: &str) -> Result<Transaction> {
        state
            .remove_transaction(id)
            .ok_or_else(|| BudgetError::TransactionNotFound(id.to_string()))
    }
}
