use super::super::collection::JobApplicationTracker;
use super::super::domain::ApplicationStatus;
use super::views::{StatusBreakdownEntry, StatusReportSummary};
use std::collections::HashMap;

/// Per-status counts captured from a tracker at one point in time.
#[derive(Debug, Default, Clone)]
pub struct StatusReport {
    pub tracker_name: String,
    pub counts: HashMap<ApplicationStatus, usize>,
    pub total: usize,
}

impl StatusReport {
    pub fn from_tracker(tracker: &JobApplicationTracker) -> Self {
        let mut counts: HashMap<ApplicationStatus, usize> = ApplicationStatus::ordered()
            .into_iter()
            .map(|status| (status, 0))
            .collect();

        for application in tracker.applications() {
            *counts.entry(application.status()).or_default() += 1;
        }

        Self {
            tracker_name: tracker.name().to_string(),
            counts,
            total: tracker.len(),
        }
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }

    pub fn percentage(&self, status: ApplicationStatus) -> Option<f64> {
        super::ratio(self.count(status), self.total)
    }

    pub fn summary(&self) -> StatusReportSummary {
        let breakdown = ApplicationStatus::ordered()
            .into_iter()
            .map(|status| StatusBreakdownEntry {
                status,
                status_label: status.label(),
                count: self.count(status),
                percentage: self.percentage(status),
            })
            .collect();

        StatusReportSummary {
            tracker_name: self.tracker_name.clone(),
            total: self.total,
            breakdown,
        }
    }
}
