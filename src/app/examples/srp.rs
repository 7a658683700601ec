use crate::core::reporting::{ReportGenerator, ReportSaver};
use crate::core::{Example, Narrator, Result, Storage};
use async_trait::async_trait;
use std::sync::Arc;

/// Generates a report and saves it, each step owned by its own collaborator.
pub struct SrpExample<S: Storage> {
    generator: ReportGenerator,
    saver: ReportSaver<S>,
    data: String,
    output_path: String,
    narrator: Arc<dyn Narrator>,
}

impl<S: Storage> SrpExample<S> {
    pub fn new(
        storage: S,
        data: impl Into<String>,
        output_path: impl Into<String>,
        narrator: Arc<dyn Narrator>,
    ) -> Self {
        Self {
            generator: ReportGenerator::new(),
            saver: ReportSaver::new(storage),
            data: data.into(),
            output_path: output_path.into(),
            narrator,
        }
    }
}

#[async_trait]
impl<S: Storage> Example for SrpExample<S> {
    fn name(&self) -> &'static str {
        "srp"
    }

    async fn run(&self) -> Result<()> {
        self.narrator.say("--- Running SRP Example ---");

        let report = self.generator.generate_report(&self.data);
        self.narrator.say("SRP Report generated.");

        self.saver.save_to_file(&report, &self.output_path).await?;
        self.narrator
            .say(&format!("SRP Report saved to {}", self.output_path));

        self.narrator.say("--------------------------");
        Ok(())
    }
}
