mod summary;
pub mod views;

use super::collection::JobApplicationTracker;
use super::domain::ApplicationStatus;

pub use summary::StatusReport;
pub use views::{StatusBreakdownEntry, StatusReportSummary};

/// Number of tracked applications currently at `status`.
pub fn count(tracker: &JobApplicationTracker, status: ApplicationStatus) -> usize {
    tracker
        .applications()
        .iter()
        .filter(|application| application.status() == status)
        .count()
}

/// Share of tracked applications at `status`, in `[0, 1]`.
///
/// An empty tracker has no meaningful share, so this returns `None` instead of dividing by zero.
pub fn percentage(tracker: &JobApplicationTracker, status: ApplicationStatus) -> Option<f64> {
    ratio(count(tracker, status), tracker.len())
}

pub(crate) fn ratio(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64)
    }
}
