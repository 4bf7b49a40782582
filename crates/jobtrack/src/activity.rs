//! Append-only diagnostic log of notable tracker events.
//!
//! `ActivityLog` is a cheap, cloneable handle. Components that record events take a
//! handle explicitly; `ActivityLog::instance()` hands out the process-wide one, which
//! lives until the process exits.

use chrono::{DateTime, Local};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

pub const LOG_CLEARED: &str = "Event log cleared.";

/// A single logged event, stamped when it was created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityEvent {
    logged_at: DateTime<Local>,
    description: String,
}

impl ActivityEvent {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            logged_at: Local::now(),
            description: description.into(),
        }
    }

    pub fn logged_at(&self) -> DateTime<Local> {
        self.logged_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.logged_at.format("%a %b %e %H:%M:%S %Y"),
            self.description
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct ActivityLog {
    events: Arc<Mutex<Vec<ActivityEvent>>>,
}

static PROCESS_LOG: OnceLock<ActivityLog> = OnceLock::new();

impl ActivityLog {
    /// A detached, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide log, created empty on first use.
    pub fn instance() -> Self {
        PROCESS_LOG.get_or_init(ActivityLog::new).clone()
    }

    pub fn log(&self, description: impl Into<String>) {
        self.record(ActivityEvent::new(description));
    }

    pub fn record(&self, event: ActivityEvent) {
        tracing::debug!(description = %event.description, "activity logged");
        self.lock().push(event);
    }

    /// Empties the log and records the clearing itself.
    pub fn clear(&self) {
        let mut events = self.lock();
        events.clear();
        events.push(ActivityEvent::new(LOG_CLEARED));
    }

    /// Snapshot of all events in insertion order.
    pub fn events(&self) -> Vec<ActivityEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True when both handles share the same storage.
    pub fn same_log(&self, other: &ActivityLog) -> bool {
        Arc::ptr_eq(&self.events, &other.events)
    }

    // Every critical section leaves the vector consistent, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<ActivityEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = ActivityEvent;
    type IntoIter = std::vec::IntoIter<ActivityEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events().into_iter()
    }
}
