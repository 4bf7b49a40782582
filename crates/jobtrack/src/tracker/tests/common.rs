use crate::tracker::domain::{ApplicationStatus, JobApplication};
use crate::tracker::JobApplicationTracker;

pub(super) const TRACKER_NAME: &str = "Sophia's Job Application Tracker";

pub(super) fn microsoft() -> JobApplication {
    JobApplication::new("2023-02-05", "Microsoft", "Product Manager").expect("valid application")
}

pub(super) fn google() -> JobApplication {
    JobApplication::new("2023-06-20", "Google", "Software Engineer").expect("valid application")
}

pub(super) fn apple() -> JobApplication {
    JobApplication::new("2022-12-25", "Apple", "iOS Engineer").expect("valid application")
}

pub(super) fn meta() -> JobApplication {
    JobApplication::new("2022-11-28", "Meta", "Tech Lead").expect("valid application")
}

pub(super) fn empty_tracker() -> JobApplicationTracker {
    JobApplicationTracker::new(TRACKER_NAME)
}

/// Microsoft, Google, Apple, Meta, all still submitted.
pub(super) fn full_tracker() -> JobApplicationTracker {
    let mut tracker = empty_tracker();
    for application in [microsoft(), google(), apple(), meta()] {
        assert!(tracker.add(application), "fixture applications are distinct");
    }
    tracker
}

/// Same four applications with one status each.
pub(super) fn mixed_status_tracker() -> JobApplicationTracker {
    let mut tracker = empty_tracker();
    tracker.add(microsoft());
    tracker.add(google().with_status(ApplicationStatus::Interviewed));
    tracker.add(apple().with_status(ApplicationStatus::Rejected));
    tracker.add(meta().with_status(ApplicationStatus::Accepted));
    tracker
}

pub(super) fn set_all(tracker: &mut JobApplicationTracker, status: ApplicationStatus) {
    for index in 0..tracker.len() {
        tracker
            .set_status(index, status)
            .expect("index within tracker");
    }
}

pub(super) fn index_of(tracker: &JobApplicationTracker, company: &str) -> usize {
    tracker
        .applications()
        .iter()
        .position(|application| application.company_name() == company)
        .expect("company tracked")
}
