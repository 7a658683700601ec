use serde::Deserialize;
use std::fmt;

/// Text produced by a report generator. Compared by value only.
///
/// [`ReportGenerator::generate_report`](crate::core::reporting::ReportGenerator::generate_report)
/// is the only constructor, so every report carries the generator's template.
///
/// ```compile_fail
/// let forged: design_patterns::Report = toml::from_str("text = \"no template\"").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Report {
    text: String,
}

impl Report {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<[u8]> for Report {
    fn as_ref(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// The runnable examples, in their default running order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ExampleKind {
    FactoryMethod,
    Srp,
    AsyncAwait,
}

impl ExampleKind {
    pub const ALL: [ExampleKind; 3] = [
        ExampleKind::FactoryMethod,
        ExampleKind::Srp,
        ExampleKind::AsyncAwait,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExampleKind::FactoryMethod => "factory-method",
            ExampleKind::Srp => "srp",
            ExampleKind::AsyncAwait => "async-await",
        }
    }
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
