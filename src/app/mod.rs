pub mod examples;

use crate::config::ShowcaseConfig;
use crate::core::runner::ExampleRunner;
use crate::core::{ExampleKind, Narrator, Storage};
use examples::{AsyncAwaitExample, FactoryMethodExample, SrpExample};
use std::sync::Arc;

/// Registers the configured examples, in configured order.
pub fn build_runner<S>(config: &ShowcaseConfig, storage: S, narrator: Arc<dyn Narrator>) -> ExampleRunner
where
    S: Storage + Clone + 'static,
{
    let mut runner = ExampleRunner::new();

    for kind in &config.examples {
        match kind {
            ExampleKind::FactoryMethod => {
                runner.register(FactoryMethodExample::new(
                    config.transport.planners.clone(),
                    Arc::clone(&narrator),
                ));
            }
            ExampleKind::Srp => {
                runner.register(SrpExample::new(
                    storage.clone(),
                    config.reporting.data.clone(),
                    config.reporting.output_path.clone(),
                    Arc::clone(&narrator),
                ));
            }
            ExampleKind::AsyncAwait => {
                runner.register(AsyncAwaitExample::new(config.delay(), Arc::clone(&narrator)));
            }
        }
    }

    runner
}
