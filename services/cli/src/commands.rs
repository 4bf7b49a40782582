use crate::infra::{non_empty, parse_date, parse_status, Session};
use crate::render::{render_applications, render_summary};
use chrono::NaiveDate;
use clap::Args;
use jobtrack::error::AppError;
use jobtrack::tracker::{ApplicationStatus, JobApplication, StatusReport};
use std::io::Write;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct AddArgs {
    /// Date the application was submitted (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: NaiveDate,
    /// Company the application was sent to
    #[arg(long, value_parser = non_empty)]
    pub(crate) company: String,
    /// Role applied for
    #[arg(long, value_parser = non_empty)]
    pub(crate) role: String,
}

#[derive(Args, Debug)]
pub(crate) struct UpdateArgs {
    /// ID as shown by `list`
    pub(crate) id: usize,
    /// New status: submitted, interviewed, accepted or rejected
    #[arg(long, value_parser = parse_status)]
    pub(crate) status: ApplicationStatus,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    /// Emit the statistics as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InitArgs {
    /// Name for the new tracker (defaults to JOBTRACK_NAME)
    #[arg(long, value_parser = non_empty)]
    pub(crate) name: Option<String>,
}

// Each handler returns whether the tracker needs saving.

pub(crate) fn add(
    session: &mut Session,
    args: AddArgs,
    out: &mut impl Write,
) -> Result<bool, AppError> {
    let application = JobApplication::with_date(args.date, args.company, args.role);
    if session.service_mut().add(application) {
        writeln!(out, "Successfully added this job application to your tracker!")?;
        Ok(true)
    } else {
        warn!("duplicate job application rejected");
        writeln!(
            out,
            "Unable to add this job application because it is already in the tracker."
        )?;
        Ok(false)
    }
}

pub(crate) fn delete(
    session: &mut Session,
    id: usize,
    out: &mut impl Write,
) -> Result<bool, AppError> {
    let removed = session.service_mut().remove_at(id)?;
    writeln!(out, "Successfully removed this job application from your tracker!")?;
    writeln!(out, "{id} | {removed}")?;
    Ok(true)
}

pub(crate) fn update(
    session: &mut Session,
    args: UpdateArgs,
    out: &mut impl Write,
) -> Result<bool, AppError> {
    let changed = session.service_mut().update_status(args.id, args.status)?;
    if changed {
        writeln!(out, "Successfully updated the status of this job application!")?;
    } else {
        writeln!(
            out,
            "Unable to update status because the status is already set to {}.",
            args.status
        )?;
    }
    Ok(changed)
}

pub(crate) fn list(session: &Session, out: &mut impl Write) -> Result<bool, AppError> {
    render_applications(out, session.tracker())?;
    Ok(false)
}

pub(crate) fn stats(
    session: &Session,
    args: StatsArgs,
    out: &mut impl Write,
) -> Result<bool, AppError> {
    let summary = StatusReport::from_tracker(session.tracker()).summary();
    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|err| AppError::Io(err.into()))?;
        writeln!(out, "{json}")?;
    } else {
        render_summary(out, &summary)?;
    }
    Ok(false)
}

pub(crate) fn clear(session: &mut Session, out: &mut impl Write) -> Result<bool, AppError> {
    let removed = session.tracker().len();
    session.service_mut().remove_all();
    writeln!(out, "Removed {removed} job application(s) from your tracker.")?;
    Ok(true)
}

pub(crate) fn init(session: &Session, out: &mut impl Write) -> Result<bool, AppError> {
    writeln!(
        out,
        "Started a new tracker '{}' at {}.",
        session.tracker().name(),
        session.store().path().display()
    )?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::tests::storage;
    use jobtrack::activity::ActivityLog;
    use jobtrack::tracker::TrackerError;

    fn add_args(date: &str, company: &str, role: &str) -> AddArgs {
        AddArgs {
            date: parse_date(date).expect("valid date"),
            company: company.to_string(),
            role: role.to_string(),
        }
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn add_reports_duplicates_without_requesting_a_save() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = Session::open(&storage(dir.path()), ActivityLog::new()).expect("opens");
        let mut out = Vec::new();

        let first = add_args("2023-02-05", "Microsoft", "PM");
        assert!(add(&mut session, first, &mut out).expect("adds"));
        let duplicate = add_args("2023-02-05", "Microsoft", "PM");
        assert!(!add(&mut session, duplicate, &mut out).expect("runs"));
        assert_eq!(session.tracker().len(), 1);

        let printed = output(out);
        assert!(printed.contains("Successfully added"));
        assert!(printed.contains("already in the tracker"));
    }

    #[test]
    fn delete_with_unknown_id_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = Session::open(&storage(dir.path()), ActivityLog::new()).expect("opens");
        let mut out = Vec::new();

        match delete(&mut session, 3, &mut out) {
            Err(AppError::Tracker(TrackerError::NoSuchApplication { index: 3, len: 0 })) => {}
            other => panic!("expected missing application, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn update_reports_unchanged_status() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = Session::open(&storage(dir.path()), ActivityLog::new()).expect("opens");
        let mut out = Vec::new();
        add(&mut session, add_args("2023-06-20", "Google", "SWE"), &mut out).expect("adds");

        let unchanged = UpdateArgs {
            id: 0,
            status: ApplicationStatus::Submitted,
        };
        assert!(!update(&mut session, unchanged, &mut out).expect("runs"));

        let changed = UpdateArgs {
            id: 0,
            status: ApplicationStatus::Interviewed,
        };
        assert!(update(&mut session, changed, &mut out).expect("runs"));
        assert_eq!(session.tracker().count(ApplicationStatus::Interviewed), 1);

        let printed = output(out);
        assert!(printed.contains("already set to SUBMITTED"));
        assert!(printed.contains("Successfully updated"));
    }

    #[test]
    fn stats_json_lists_every_status() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut session = Session::open(&storage(dir.path()), ActivityLog::new()).expect("opens");
        let mut out = Vec::new();
        add(&mut session, add_args("2022-11-28", "Meta", "Tech Lead"), &mut out).expect("adds");

        let mut json_out = Vec::new();
        assert!(!stats(&session, StatsArgs { json: true }, &mut json_out).expect("runs"));
        let value: serde_json::Value =
            serde_json::from_slice(&json_out).expect("stats output is json");
        assert_eq!(value["total"], 1);
        assert_eq!(value["breakdown"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["breakdown"][0]["percentage"], 1.0);
    }

    #[test]
    fn clear_then_save_persists_an_empty_tracker() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = storage(dir.path());
        let mut session = Session::open(&storage, ActivityLog::new()).expect("opens");
        let mut out = Vec::new();
        add(&mut session, add_args("2022-12-25", "Apple", "iOS Engineer"), &mut out).expect("adds");
        session.save().expect("saves");

        assert!(clear(&mut session, &mut out).expect("clears"));
        session.save().expect("saves");

        let reopened = Session::open(&storage, ActivityLog::new()).expect("reopens");
        assert!(reopened.tracker().is_empty());
        assert_eq!(reopened.tracker().name(), "Test Tracker");
        assert!(output(out).contains("Removed 1 job application(s)"));
    }
}
