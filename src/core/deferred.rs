use crate::domain::ports::Narrator;
use std::time::Duration;

pub const DEFERRED_RESULT: &str = "Success";

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Suspends on the runtime timer for `delay`, then yields [`DEFERRED_RESULT`].
///
/// There is no cancellation: once awaited, the delay always runs to completion.
pub async fn long_running_operation(delay: Duration, narrator: &dyn Narrator) -> String {
    narrator.say("LongRunningOperation: Started.");
    tracing::debug!("Suspending for {:?}", delay);

    tokio::time::sleep(delay).await;

    narrator.say("LongRunningOperation: Finished.");
    DEFERRED_RESULT.to_string()
}
