#![allow(dead_code)]

use std::rc::Rc;

use chrono::NaiveDate;
use payday_budget::{
    config::ConfigManager, AppConfig, BudgetController, BudgetStore, FixedClock, JsonFileStore,
};
use tempfile::TempDir;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Isolated on-disk environment: a config manager and a budget file under one temp dir.
pub struct TestEnv {
    pub temp: TempDir,
    pub config_manager: ConfigManager,
    pub clock: Rc<FixedClock>,
}

impl TestEnv {
    pub fn new(today: NaiveDate) -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let config_manager = ConfigManager::with_base_dir(temp.path().to_path_buf())
            .expect("create config manager for temp dir");
        Self {
            temp,
            config_manager,
            clock: Rc::new(FixedClock::new(today)),
        }
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            data_dir: Some(self.temp.path().join("data")),
            ..AppConfig::default()
        }
    }

    /// Opens a controller over the budget file, as a fresh process would.
    pub fn open(&self) -> BudgetController<Rc<FixedClock>> {
        let config = self.config();
        let backend = JsonFileStore::open(config.store_path()).expect("open json store");
        BudgetController::open(
            BudgetStore::new(Box::new(backend)),
            Rc::clone(&self.clock),
            config,
        )
        .expect("open controller")
    }
}
