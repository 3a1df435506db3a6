use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Direction of a recurring money movement relative to the user's balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    /// Applies the signed effect of `amount` to a running balance.
    pub fn apply(self, running: f64, amount: f64) -> f64 {
        match self {
            TransactionKind::Debit => running - amount,
            TransactionKind::Credit => running + amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debit" => Ok(TransactionKind::Debit),
            "credit" => Ok(TransactionKind::Credit),
            other => Err(format!("unknown transaction kind `{other}`")),
        }
    }
}

/// A recurring obligation or income pinned to a nominal day of the month.
///
/// The same record recurs every period; only `settled` changes on rollover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub day_of_month: u32,
    #[serde(default)]
    pub settled: bool,
}

impl Transaction {
    /// Creates an unsettled transaction with a freshly generated identifier.
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        day_of_month: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            amount,
            kind,
            day_of_month,
            settled: false,
        }
    }

    pub fn with_settled(mut self, settled: bool) -> Self {
        self.settled = settled;
        self
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} ({} {:.2} on day {})",
            self.title, self.kind, self.amount, self.day_of_month
        )
    }
}
