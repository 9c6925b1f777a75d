use std::sync::Arc;

use slot_engine::{Scheduler, WorkWindow};
use tokio::sync::Mutex;

/// Shared application state.
///
/// Every handler holds the lock for its whole operation, so a booking's
/// availability check and its commit happen as one step.
#[derive(Clone)]
pub struct AppState {
    scheduler: Arc<Mutex<Scheduler>>,
}

impl AppState {
    pub fn new(window: WorkWindow) -> Self {
        Self::from_scheduler(Scheduler::with_window(window))
    }

    pub fn from_scheduler(scheduler: Scheduler) -> Self {
        AppState {
            scheduler: Arc::new(Mutex::new(scheduler)),
        }
    }

    pub fn scheduler(&self) -> &Mutex<Scheduler> {
        &self.scheduler
    }
}
