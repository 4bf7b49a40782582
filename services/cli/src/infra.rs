use chrono::NaiveDate;
use jobtrack::activity::ActivityLog;
use jobtrack::config::StorageConfig;
use jobtrack::error::AppError;
use jobtrack::persistence::TrackerStore;
use jobtrack::tracker::{ApplicationStatus, JobApplicationTracker, TrackerService};
use std::io::{self, Write};
use tracing::info;

/// One command's worth of work: the loaded tracker, where it came from, and the log
/// that records what the command did.
pub(crate) struct Session {
    store: TrackerStore,
    service: TrackerService,
}

impl Session {
    /// Loads the stored tracker, or starts an empty one under the configured name when
    /// nothing has been saved yet.
    pub(crate) fn open(storage: &StorageConfig, log: ActivityLog) -> Result<Self, AppError> {
        let store = TrackerStore::new(&storage.path);
        let tracker = if store.exists() {
            let tracker = store.read()?;
            log.log(format!("Loaded tracker {}.", tracker.name()));
            tracker
        } else {
            info!(path = %store.path().display(), "no saved tracker, starting a new one");
            JobApplicationTracker::new(storage.tracker_name.as_str())
        };

        Ok(Self {
            store,
            service: TrackerService::new(tracker, log),
        })
    }

    /// Starts an empty tracker without reading the store.
    pub(crate) fn fresh(storage: &StorageConfig, name: Option<String>, log: ActivityLog) -> Self {
        let name = name.unwrap_or_else(|| storage.tracker_name.clone());
        log.log(format!("Created tracker {name}."));
        Self {
            store: TrackerStore::new(&storage.path),
            service: TrackerService::new(JobApplicationTracker::new(name), log),
        }
    }

    pub(crate) fn service_mut(&mut self) -> &mut TrackerService {
        &mut self.service
    }

    pub(crate) fn tracker(&self) -> &JobApplicationTracker {
        self.service.tracker()
    }

    pub(crate) fn store(&self) -> &TrackerStore {
        &self.store
    }

    pub(crate) fn save(&self) -> Result<(), AppError> {
        self.store.write(self.tracker())?;
        self.service.log().log(format!(
            "Saved tracker {} to {}.",
            self.tracker().name(),
            self.store.path().display()
        ));
        Ok(())
    }

    pub(crate) fn print_log(&self, out: &mut impl Write) -> io::Result<()> {
        for event in self.service.log() {
            writeln!(out, "{event}")?;
        }
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Case-insensitive, unlike the persisted format.
pub(crate) fn parse_status(raw: &str) -> Result<ApplicationStatus, String> {
    raw.trim()
        .to_ascii_uppercase()
        .parse::<ApplicationStatus>()
        .map_err(|_| {
            let allowed: Vec<&str> = ApplicationStatus::ordered()
                .into_iter()
                .map(ApplicationStatus::as_str)
                .collect();
            format!("'{raw}' is not one of {}", allowed.join(", "))
        })
}

pub(crate) fn non_empty(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
