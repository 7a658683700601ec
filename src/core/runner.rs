use crate::core::Example;
use crate::utils::error::Result;

pub struct ExampleRunner {
    examples: Vec<Box<dyn Example>>,
}

impl ExampleRunner {
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
        }
    }

    pub fn register<E: Example + 'static>(&mut self, example: E) -> &mut Self {
        self.examples.push(Box::new(example));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.examples.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Runs every registered example in order. The first failure stops the
    /// run and is returned as-is.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Running {} example(s)", self.examples.len());

        for (index, example) in self.examples.iter().enumerate() {
            tracing::info!("▶ [{}/{}] {}", index + 1, self.examples.len(), example.name());

            if let Err(e) = example.run().await {
                tracing::error!("❌ {} failed: {}", example.name(), e);
                return Err(e);
            }

            tracing::debug!("✅ {} finished", example.name());
        }

        Ok(self.examples.len())
    }
}

impl Default for ExampleRunner {
    fn default() -> Self {
        Self::new()
    }
}
