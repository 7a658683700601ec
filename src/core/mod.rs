pub mod deferred;
pub mod reporting;
pub mod runner;
pub mod transport;

pub use crate::domain::model::{ExampleKind, Report};
pub use crate::domain::ports::{Example, Narrator, Storage};
pub use crate::utils::error::Result;
