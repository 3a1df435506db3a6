//! Validation for the manually entered balance baseline.

use crate::domain::BudgetState;
use crate::errors::{BudgetError, Result};

pub struct BalanceService;

impl BalanceService {
    /// Replaces the balance baseline. Non-finite values are rejected.
    pub fn set(state: &mut BudgetState, balance: f64) -> Result<()> {
        if !balance.is_finite() {
            return Err(BudgetError::validation("balance must be a finite number"));
        }
        state.balance = balance;
        Ok(())
    }

    /// Parses balance text typed by the user; blank input clears the balance to zero.
    pub fn parse(text: &str) -> Result<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| BudgetError::Validation(format!("balance `{trimmed}` is not a number")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_rejects_nan_without_touching_state() {
        let mut state = BudgetState::default();
        state.balance = 42.0;
        assert!(BalanceService::set(&mut state, f64::NAN).is_err());
        assert!(BalanceService::set(&mut state, f64::INFINITY).is_err());
        assert_eq!(state.balance, 42.0);
    }

    #[test]
    fn negative_balance_is_allowed() {
        let mut state = BudgetState::default();
        BalanceService::set(&mut state, -120.5).unwrap();
        assert_eq!(state.balance, -120.5);
    }

    #[test]
    fn parse_handles_blank_and_garbage() {
        assert_eq!(BalanceService::parse("  ").unwrap(), 0.0);
        assert_eq!(BalanceService::parse(" 1250.75 ").unwrap(), 1250.75);
        let err = BalanceService::parse("lots").unwrap_err();
        assert!(matches!(err, BudgetError::Validation(ref message) if message.contains("lots")));
    }
}
