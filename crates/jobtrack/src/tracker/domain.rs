use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Submitted,
    Interviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Submitted,
            Self::Interviewed,
            Self::Accepted,
            Self::Rejected,
        ]
    }

    /// Canonical spelling used in persisted documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Interviewed => "INTERVIEWED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Interviewed => "Interviewed",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = TrackerError;

    /// Only the exact canonical spelling is accepted.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| TrackerError::UnknownStatus(value.to_string()))
    }
}

/// A single job application: when it was sent, where, for which role, and how it is going.
///
/// Equality is structural over all four fields, so changing the status of a stored
/// application changes which records it compares equal to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobApplication {
    submission_date: NaiveDate,
    company_name: String,
    role_name: String,
    status: ApplicationStatus,
}

impl JobApplication {
    /// Builds a submitted application from an ISO `YYYY-MM-DD` date.
    ///
    /// Company and role are expected to be non-empty; that is left to the caller.
    pub fn new(
        date: &str,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, TrackerError> {
        let submission_date = parse_submission_date(date)?;
        Ok(Self::with_date(submission_date, company, role))
    }

    pub fn with_date(
        submission_date: NaiveDate,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            submission_date,
            company_name: company.into(),
            role_name: role.into(),
            status: ApplicationStatus::Submitted,
        }
    }

    pub fn submission_date(&self) -> NaiveDate {
        self.submission_date
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn set_submission_date(&mut self, date: &str) -> Result<(), TrackerError> {
        self.submission_date = parse_submission_date(date)?;
        Ok(())
    }

    pub fn set_company_name(&mut self, company: impl Into<String>) {
        self.company_name = company.into();
    }

    pub fn set_role_name(&mut self, role: impl Into<String>) {
        self.role_name = role.into();
    }

    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    /// Builder-style status override, handy when reconstructing stored records.
    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }
}

impl fmt::Display for JobApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.submission_date, self.company_name, self.role_name, self.status
        )
    }
}

pub(crate) fn parse_submission_date(raw: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| {
        TrackerError::InvalidDateFormat {
            value: raw.to_string(),
            source,
        }
    })
}

/// Error enumeration for record construction and tracker lookups.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("'{value}' is not a valid YYYY-MM-DD date")]
    InvalidDateFormat {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unknown application status '{0}'")]
    UnknownStatus(String),
    #[error("no job application with id {index} (tracker holds {len})")]
    NoSuchApplication { index: usize, len: usize },
}
