//! Facade that ties the budget state, its store and the clock together.

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::core::rollover::{check_rollover, RolloverOutcome};
use crate::core::services::{
    BalanceService, PeriodSummary, SettingsService, SummaryService, TransactionInput,
    TransactionService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::{BudgetState, Displayable, Transaction};
use crate::errors::{BudgetError, Result};
use crate::period::{resolve_period, Period, ScheduledTransaction};
use crate::storage::{self, BudgetStore, JsonFileStore};

/// Owns the single in-memory [`BudgetState`] and keeps the store in step with it.
///
/// Mutations run against a draft copy; the draft replaces the live state only
/// once the store has accepted it.
pub struct BudgetController<C: Clock = SystemClock> {
    state: BudgetState,
    store: BudgetStore,
    clock: C,
    config: AppConfig,
}

impl BudgetController<SystemClock> {
    /// Opens the file-backed store described by `config` using the wall clock.
    pub fn open_default(config: AppConfig) -> Result<Self> {
        let backend = JsonFileStore::open(config.store_path())?;
        Self::open(BudgetStore::new(Box::new(backend)), SystemClock, config)
    }
}

impl<C: Clock> BudgetController<C> {
    /// Loads the persisted state and runs the rollover check once.
    pub fn open(store: BudgetStore, clock: C, config: AppConfig) -> Result<Self> {
        let state = store.load()?;
        let mut controller = Self {
            state,
            store,
            clock,
            config,
        };
        let mut draft = controller.state.clone();
        if check_rollover(&mut draft, controller.today()).rolled_over() {
            controller.commit(draft)?;
        }
        tracing::debug!(
            transactions = controller.state.transaction_count(),
            "budget controller opened"
        );
        Ok(controller)
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The period containing today under the current start day.
    pub fn period(&self) -> Period {
        resolve_period(self.today(), self.state.settings.start_day)
    }

    /// Re-runs the rollover check for today, then projects the allowance.
    pub fn evaluate(&mut self) -> Result<PeriodSummary> {
        let today = self.today();
        let mut draft = self.state.clone();
        if let RolloverOutcome::RolledOver { .. } = check_rollover(&mut draft, today) {
            self.commit(draft)?;
        }
        Ok(SummaryService::summarize(&self.state, today))
    }

    pub fn transaction(&self, id: &str) -> Result<&Transaction> {
        TransactionService::find(&self.state, id)
    }

    /// Transactions paired with their concrete dates, in date order.
    pub fn schedule(&self) -> Vec<ScheduledTransaction<'_>> {
        SummaryService::schedule(&self.state, self.today())
    }

    pub fn set_balance(&mut self, balance: f64) -> Result<()> {
        self.mutate(|state, _, _| BalanceService::set(state, balance))
    }

    /// Sets the balance from form text; blank text means zero.
    pub fn set_balance_text(&mut self, text: &str) -> Result<()> {
        let balance = BalanceService::parse(text)?;
        self.set_balance(balance)
    }

    pub fn add_transaction(&mut self, input: TransactionInput) -> Result<String> {
        self.mutate(|state, today, config| TransactionService::add(state, input, today, config))
    }

    pub fn edit_transaction(&mut self, id: &str, input: TransactionInput) -> Result<()> {
        self.mutate(|state, _, config| {
            TransactionService::edit(state, id, input, &config.placeholder_title)
        })
    }

    /// Flips the settlement flag of `id` and returns the new value.
    pub fn toggle_settled(&mut self, id: &str) -> Result<bool> {
        self.mutate(|state, _, _| TransactionService::toggle_settled(state, id))
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let removed = self.mutate(|state, _, _| TransactionService::remove(state, id))?;
        tracing::info!(transaction = %removed.display_label(), "transaction deleted");
        Ok(())
    }

    /// Changes the period start day. When that moves the current period, the
    /// rollover check that follows every mutation clears settlement.
    pub fn update_settings(&mut self, start_day: u32) -> Result<()> {
        self.mutate(|state, _, _| SettingsService::update(state, start_day))
    }

    pub fn export_data(&self) -> Result<String> {
        storage::export_data(&self.state)
    }

    /// Replaces the whole state with a validated backup. On any format error the
    /// current state and store stay as they were.
    pub fn import_data(&mut self, text: &str) -> Result<()> {
        let mut imported = storage::import_data(text).map_err(|err| {
            tracing::warn!(error = %err, "backup rejected");
            BudgetError::from(err)
        })?;
        check_rollover(&mut imported, self.today());
        let count = imported.transaction_count();
        self.commit(imported)?;
        tracing::info!(transactions = count, "backup imported");
        Ok(())
    }

    /// Clears the store and starts over from default state.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.state = BudgetState::default();
        let mut draft = self.state.clone();
        check_rollover(&mut draft, self.today());
        self.commit(draft)?;
        tracing::info!("budget reset to defaults");
        Ok(())
    }

    fn mutate<T, F>(&mut self, apply: F) -> Result<T>
    where
        F: FnOnce(&mut BudgetState, NaiveDate, &AppConfig) -> Result<T>,
    {
        let today = self.today();
        let mut draft = self.state.clone();
        check_rollover(&mut draft, today);
        let value = match apply(&mut draft, today, &self.config) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "mutation rejected");
                return Err(err);
            }
        };
        check_rollover(&mut draft, today);
        self.commit(draft)?;
        Ok(value)
    }

    fn commit(&mut self, next: BudgetState) -> Result<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }
}
