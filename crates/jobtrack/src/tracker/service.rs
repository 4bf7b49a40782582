use super::collection::JobApplicationTracker;
use super::domain::{ApplicationStatus, JobApplication, TrackerError};
use crate::activity::ActivityLog;

/// Tracker paired with the activity log that records what happened to it.
///
/// The tracker itself never logs; every mutation that should leave a trail goes
/// through this service.
#[derive(Debug, Clone)]
pub struct TrackerService {
    tracker: JobApplicationTracker,
    log: ActivityLog,
}

impl TrackerService {
    pub fn new(tracker: JobApplicationTracker, log: ActivityLog) -> Self {
        Self { tracker, log }
    }

    pub fn add(&mut self, application: JobApplication) -> bool {
        let description = format!(
            "Added job application: {} at {}.",
            application.role_name(),
            application.company_name()
        );
        let added = self.tracker.add(application);
        if added {
            self.log.log(description);
        }
        added
    }

    pub fn remove_at(&mut self, index: usize) -> Result<JobApplication, TrackerError> {
        let removed = self.tracker.remove_at(index)?;
        self.log.log(format!(
            "Removed job application: {} at {}.",
            removed.role_name(),
            removed.company_name()
        ));
        Ok(removed)
    }

    pub fn update_status(
        &mut self,
        index: usize,
        status: ApplicationStatus,
    ) -> Result<bool, TrackerError> {
        let changed = self.tracker.set_status(index, status)?;
        if changed {
            if let Some(application) = self.tracker.get(index) {
                self.log.log(format!(
                    "Updated status of {} at {} to {}.",
                    application.role_name(),
                    application.company_name(),
                    status
                ));
            }
        }
        Ok(changed)
    }

    pub fn remove_all(&mut self) {
        self.tracker.remove_all();
        self.log.log(format!(
            "Removed all job applications from {}.",
            self.tracker.name()
        ));
    }

    pub fn tracker(&self) -> &JobApplicationTracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> JobApplicationTracker {
        self.tracker
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }
}
