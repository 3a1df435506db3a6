use serde::{Deserialize, Serialize};

use super::{Identifiable, Settings, Transaction};

/// Snapshot of everything the engine needs to evaluate an allowance.
///
/// `period_key` is bookkeeping for rollover detection and is never user-editable.
/// `None` means no period has been observed yet, which forces a rollover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_key: Option<String>,
}

impl BudgetState {
    pub fn new(balance: f64, settings: Settings) -> Self {
        Self {
            balance,
            transactions: Vec::new(),
            settings,
            period_key: None,
        }
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn transaction_mut(&mut self, id: &str) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id() == id)
    }

    pub fn remove_transaction(&mut self, id: &str) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id() == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
