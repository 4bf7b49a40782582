use super::super::domain::ApplicationStatus;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusBreakdownEntry {
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReportSummary {
    pub tracker_name: String,
    pub total: usize,
    pub breakdown: Vec<StatusBreakdownEntry>,
}
