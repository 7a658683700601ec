pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{ConsoleNarrator, LocalStorage};
pub use app::build_runner;
pub use config::ShowcaseConfig;
pub use crate::core::reporting::{ReportGenerator, ReportSaver};
pub use crate::core::runner::ExampleRunner;
pub use crate::core::transport::{Logistics, Transport};
pub use domain::model::{ExampleKind, Report};
pub use utils::error::{Result, ShowcaseError};
