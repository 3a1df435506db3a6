use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so the engine stays deterministic in tests.
pub trait Clock {
    /// Returns the local wall-clock date.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date; advance it explicitly with [`FixedClock::set`].
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: std::cell::Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: std::cell::Cell::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
