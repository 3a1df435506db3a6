//! Versioned backup text format: `{ v: 1, balance, settings, transactions }`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{is_valid_day, BudgetState, Settings, Transaction};
use crate::errors::{FormatError, Result};

pub const BACKUP_VERSION: u64 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct BackupV1 {
    v: u64,
    balance: f64,
    settings: Settings,
    transactions: Vec<Transaction>,
}

/// Serializes the user-owned part of `state` into the backup format.
///
/// The period key is bookkeeping and is not exported.
pub fn export_data(state: &BudgetState) -> Result<String> {
    let backup = BackupV1 {
        v: BACKUP_VERSION,
        balance: state.balance,
        settings: state.settings,
        transactions: state.transactions.clone(),
    };
    Ok(serde_json::to_string_pretty(&backup)?)
}

/// Parses and validates a backup payload into a fresh state.
///
/// The returned state carries no period key, so the next rollover check
/// recomputes settlement instead of trusting the restored flags.
pub fn import_data(text: &str) -> std::result::Result<BudgetState, FormatError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| FormatError::Malformed(err.to_string()))?;
    let object = value.as_object().ok_or(FormatError::NotAnObject)?;

    check_version(object)?;
    let raw_transactions = match object.get("transactions") {
        Some(Value::Array(items)) => items,
        _ => return Err(FormatError::TransactionsNotSequence),
    };

    let balance = object
        .get("balance")
        .and_then(Value::as_f64)
        .filter(|balance| balance.is_finite())
        .ok_or_else(|| invalid("balance", "expected a number"))?;
    let settings = parse_settings(object.get("settings"))?;
    let transactions = parse_transactions(raw_transactions)?;

    Ok(BudgetState {
        balance,
        transactions,
        settings,
        period_key: None,
    })
}

fn check_version(object: &Map<String, Value>) -> std::result::Result<(), FormatError> {
    match object.get("v") {
        Some(v) if v.as_u64() == Some(BACKUP_VERSION) => Ok(()),
        Some(other) => Err(FormatError::UnsupportedVersion(other.to_string())),
        None => Err(FormatError::UnsupportedVersion("missing".into())),
    }
}

fn parse_settings(value: Option<&Value>) -> std::result::Result<Settings, FormatError> {
    let value = value.ok_or_else(|| invalid("settings", "missing"))?;
    let settings: Settings = serde_json::from_value(value.clone())
        .map_err(|err| invalid("settings", &err.to_string()))?;
    if !settings.is_valid() {
        return Err(invalid(
            "settings.startDay",
            &format!("{} is not between 1 and 31", settings.start_day),
        ));
    }
    Ok(settings)
}

fn parse_transactions(items: &[Value]) -> std::result::Result<Vec<Transaction>, FormatError> {
    let mut seen = HashSet::new();
    let mut transactions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("transactions[{index}]");
        let txn: Transaction = serde_json::from_value(item.clone())
            .map_err(|err| invalid(&field, &err.to_string()))?;
        if !txn.amount.is_finite() || txn.amount <= 0.0 {
            return Err(invalid(&field, "amount must be positive"));
        }
        if !is_valid_day(txn.day_of_month) {
            return Err(invalid(&field, "dayOfMonth must be between 1 and 31"));
        }
        if !seen.insert(txn.id.clone()) {
            return Err(FormatError::DuplicateId(txn.id));
        }
        transactions.push(txn);
    }
    Ok(transactions)
}

fn invalid(field: &str, reason: &str) -> FormatError {
    FormatError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
