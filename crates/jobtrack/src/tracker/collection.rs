use super::domain::{ApplicationStatus, JobApplication, TrackerError};

/// Named, insertion-ordered collection of job applications.
///
/// Interactive `add` keeps the collection free of equal records. Membership is a
/// linear scan over structural equality so that in-place status changes never leave
/// a stale key behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplicationTracker {
    name: String,
    applications: Vec<JobApplication>,
}

impl JobApplicationTracker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            applications: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends `application` unless an equal one is already tracked.
    pub fn add(&mut self, application: JobApplication) -> bool {
        if self.contains(&application) {
            return false;
        }
        self.applications.push(application);
        true
    }

    pub fn add_from_parts(
        &mut self,
        date: &str,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<bool, TrackerError> {
        let application = JobApplication::new(date, company, role)?;
        Ok(self.add(application))
    }

    /// Removes the first application equal to `application`; survivors keep their order.
    pub fn remove(&mut self, application: &JobApplication) -> bool {
        match self.position(application) {
            Some(index) => {
                self.applications.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<JobApplication, TrackerError> {
        self.check_index(index)?;
        Ok(self.applications.remove(index))
    }

    pub fn remove_all(&mut self) {
        self.applications.clear();
    }

    /// Changes the status of the application at `index` in place.
    ///
    /// Returns `Ok(false)` when the application already has `status`.
    pub fn set_status(
        &mut self,
        index: usize,
        status: ApplicationStatus,
    ) -> Result<bool, TrackerError> {
        self.check_index(index)?;
        let application = &mut self.applications[index];
        if application.status() == status {
            return Ok(false);
        }
        application.set_status(status);
        Ok(true)
    }

    pub fn applications(&self) -> &[JobApplication] {
        &self.applications
    }

    pub fn get(&self, index: usize) -> Option<&JobApplication> {
        self.applications.get(index)
    }

    pub fn contains(&self, application: &JobApplication) -> bool {
        self.position(application).is_some()
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        super::report::count(self, status)
    }

    pub fn percentage(&self, status: ApplicationStatus) -> Option<f64> {
        super::report::percentage(self, status)
    }

    /// Appends without the uniqueness check; bulk loads keep documents verbatim.
    pub(crate) fn push_unchecked(&mut self, application: JobApplication) {
        self.applications.push(application);
    }

    fn position(&self, application: &JobApplication) -> Option<usize> {
        self.applications
            .iter()
            .position(|existing| existing == application)
    }

    fn check_index(&self, index: usize) -> Result<(), TrackerError> {
        if index < self.applications.len() {
            Ok(())
        } else {
            Err(TrackerError::NoSuchApplication {
                index,
                len: self.applications.len(),
            })
        }
    }
}
