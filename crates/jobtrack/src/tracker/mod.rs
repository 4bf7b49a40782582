//! Job application records, the tracker that owns them, and the read-only
//! status report layered on top.

mod collection;
pub mod domain;
pub mod report;
mod service;

#[cfg(test)]
mod tests;

pub use collection::JobApplicationTracker;
pub use domain::{ApplicationStatus, JobApplication, TrackerError};
pub use report::{count, percentage, StatusBreakdownEntry, StatusReport, StatusReportSummary};
pub use service::TrackerService;
