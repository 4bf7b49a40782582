use super::PersistenceError;
use crate::tracker::domain::{parse_submission_date, DATE_FORMAT};
use crate::tracker::{ApplicationStatus, JobApplication, JobApplicationTracker, TrackerError};
use serde::{Deserialize, Serialize};

/// Wire shape of a whole tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerDocument {
    pub name: String,
    #[serde(alias = "jobApplicationList")]
    pub records: Vec<RecordDocument>,
}

/// Wire shape of one application. Date and status stay textual so that bad values
/// surface as record errors instead of generic JSON errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDocument {
    pub submission_date: String,
    pub company_name: String,
    pub role_name: String,
    pub status: String,
}

impl From<&JobApplication> for RecordDocument {
    fn from(application: &JobApplication) -> Self {
        Self {
            submission_date: application
                .submission_date()
                .format(DATE_FORMAT)
                .to_string(),
            company_name: application.company_name().to_string(),
            role_name: application.role_name().to_string(),
            status: application.status().as_str().to_string(),
        }
    }
}

impl TryFrom<RecordDocument> for JobApplication {
    type Error = TrackerError;

    fn try_from(record: RecordDocument) -> Result<Self, Self::Error> {
        let submission_date = parse_submission_date(&record.submission_date)?;
        let status: ApplicationStatus = record.status.parse()?;
        Ok(
            JobApplication::with_date(submission_date, record.company_name, record.role_name)
                .with_status(status),
        )
    }
}

pub fn to_document(tracker: &JobApplicationTracker) -> TrackerDocument {
    TrackerDocument {
        name: tracker.name().to_string(),
        records: tracker
            .applications()
            .iter()
            .map(RecordDocument::from)
            .collect(),
    }
}

/// Rebuilds a tracker in document order.
///
/// Records are appended as-is: duplicates present in the document are kept, unlike
/// interactive `add`.
pub fn from_document(document: TrackerDocument) -> Result<JobApplicationTracker, PersistenceError> {
    let mut tracker = JobApplicationTracker::new(document.name);
    for (position, record) in document.records.into_iter().enumerate() {
        let application = JobApplication::try_from(record)
            .map_err(|source| PersistenceError::InvalidRecord { position, source })?;
        tracker.push_unchecked(application);
    }
    Ok(tracker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, company: &str, role: &str, status: &str) -> RecordDocument {
        RecordDocument {
            submission_date: date.to_string(),
            company_name: company.to_string(),
            role_name: role.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn record_document_uses_canonical_fields() {
        let application = JobApplication::new("2023-06-20", "Google", "Software Engineer")
            .expect("valid")
            .with_status(ApplicationStatus::Interviewed);

        let value = serde_json::to_value(RecordDocument::from(&application)).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "submissionDate": "2023-06-20",
                "companyName": "Google",
                "roleName": "Software Engineer",
                "status": "INTERVIEWED",
            })
        );
    }

    #[test]
    fn status_is_applied_after_construction() {
        let application =
            JobApplication::try_from(record("2022-11-28", "Meta", "Tech Lead", "ACCEPTED"))
                .expect("valid record");
        assert_eq!(application.status(), ApplicationStatus::Accepted);
    }

    #[test]
    fn duplicate_records_survive_a_load() {
        let document = TrackerDocument {
            name: "dupes".to_string(),
            records: vec![
                record("2023-02-05", "Microsoft", "Product Manager", "SUBMITTED"),
                record("2023-02-05", "Microsoft", "Product Manager", "SUBMITTED"),
            ],
        };

        let tracker = from_document(document).expect("loads");
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.get(0), tracker.get(1));
    }

    #[test]
    fn errors_name_the_offending_position() {
        let document = TrackerDocument {
            name: "broken".to_string(),
            records: vec![
                record("2023-02-05", "Microsoft", "Product Manager", "SUBMITTED"),
                record("2023-06-20", "Google", "Software Engineer", "PENDING"),
            ],
        };

        match from_document(document) {
            Err(PersistenceError::InvalidRecord {
                position: 1,
                source: TrackerError::UnknownStatus(status),
            }) => assert_eq!(status, "PENDING"),
            other => panic!("expected unknown status at position 1, got {other:?}"),
        }
    }

    #[test]
    fn legacy_list_key_is_accepted() {
        let raw = r#"{"name": "legacy", "jobApplicationList": [
            {"submissionDate": "2022-12-25", "companyName": "Apple",
             "roleName": "iOS Engineer", "status": "REJECTED"}
        ]}"#;
        let document: TrackerDocument = serde_json::from_str(raw).expect("legacy shape parses");
        assert_eq!(document.records.len(), 1);
        assert_eq!(document.records[0].status, "REJECTED");
    }
}
