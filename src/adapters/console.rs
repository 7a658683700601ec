use crate::core::Narrator;

/// Prints narration to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn say(&self, line: &str) {
        tracing::debug!(narration = line);
        println!("{}", line);
    }
}
