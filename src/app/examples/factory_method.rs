use crate::core::transport::Logistics;
use crate::core::{Example, Narrator, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub struct FactoryMethodExample {
    planners: Vec<Logistics>,
    narrator: Arc<dyn Narrator>,
}

impl FactoryMethodExample {
    pub fn new(planners: Vec<Logistics>, narrator: Arc<dyn Narrator>) -> Self {
        Self { planners, narrator }
    }

    /// Plans one delivery per planner and returns the descriptions in order.
    pub fn plan_all(&self) -> Vec<&'static str> {
        self.planners
            .iter()
            .map(|planner| planner.plan_delivery(self.narrator.as_ref()))
            .collect()
    }
}

#[async_trait]
impl Example for FactoryMethodExample {
    fn name(&self) -> &'static str {
        "factory-method"
    }

    async fn run(&self) -> Result<()> {
        self.narrator.say("--- Running Factory Method Example ---");
        let deliveries = self.plan_all();
        tracing::debug!("Planned {} deliveries", deliveries.len());
        self.narrator.say("-----------------------------------");
        Ok(())
    }
}
