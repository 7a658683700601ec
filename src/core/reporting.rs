use crate::domain::model::Report;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

const REPORT_PREFIX: &str = "Report based on: ";

/// Builds reports. Pure: no I/O, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report(&self, data: &str) -> Report {
        Report::new(format!("{}{}", REPORT_PREFIX, data))
    }
}

/// Persists reports through a [`Storage`] backend.
#[derive(Debug, Clone)]
pub struct ReportSaver<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportSaver<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Replaces whatever is at `path` with the report text.
    pub async fn save_to_file(&self, report: &Report, path: &str) -> Result<()> {
        tracing::debug!("Writing report ({} bytes) to {}", report.as_str().len(), path);
        self.storage.write_file(path, report.as_ref()).await
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
