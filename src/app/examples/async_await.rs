use crate::core::deferred::long_running_operation;
use crate::core::{Example, Narrator, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub struct AsyncAwaitExample {
    delay: Duration,
    narrator: Arc<dyn Narrator>,
}

impl AsyncAwaitExample {
    pub fn new(delay: Duration, narrator: Arc<dyn Narrator>) -> Self {
        Self { delay, narrator }
    }
}

#[async_trait]
impl Example for AsyncAwaitExample {
    fn name(&self) -> &'static str {
        "async-await"
    }

    async fn run(&self) -> Result<()> {
        self.narrator.say("--- Running Async/Await Example ---");
        self.narrator.say("Starting async operation...");

        let result = long_running_operation(self.delay, self.narrator.as_ref()).await;
        self.narrator
            .say(&format!("Async operation completed with result: {}", result));

        self.narrator.say("---------------------------------");
        Ok(())
    }
}
