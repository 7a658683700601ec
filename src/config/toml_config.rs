use crate::core::deferred::DEFAULT_DELAY;
use crate::core::transport::Logistics;
use crate::domain::model::ExampleKind;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub examples: Vec<ExampleKind>,
    pub transport: TransportConfig,
    pub reporting: ReportingConfig,
    pub deferred: DeferredConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub planners: Vec<Logistics>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    pub data: String,
    pub output_path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeferredConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            examples: ExampleKind::ALL.to_vec(),
            transport: TransportConfig::default(),
            reporting: ReportingConfig::default(),
            deferred: DeferredConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            planners: vec![Logistics::Road, Logistics::Sea],
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            data: "Sample Data".to_string(),
            output_path: "report.txt".to_string(),
        }
    }
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` with the environment value.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShowcaseError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.deferred.delay_ms)
    }
}

impl Validate for ShowcaseConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("examples", self.examples.len(), 1)?;
        validate_positive_number("transport.planners", self.transport.planners.len(), 1)?;
        validate_path("reporting.output_path", &self.reporting.output_path)?;
        validate_range("deferred.delay_ms", self.deferred.delay_ms, 0, MAX_DELAY_MS)?;

        if self.logging.level.trim().is_empty() {
            return Err(ShowcaseError::ConfigValidationError {
                field: "logging.level".to_string(),
                message: "Log level cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ShowcaseConfig::from_toml_str("").unwrap();

        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.examples, ExampleKind::ALL.to_vec());
        assert_eq!(config.transport.planners, vec![Logistics::Road, Logistics::Sea]);
        assert_eq!(config.reporting.data, "Sample Data");
        assert_eq!(config.reporting.output_path, "report.txt");
        assert_eq!(config.delay(), Duration::from_millis(2000));
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
examples = ["async-await", "factory-method"]

[transport]
planners = ["sea"]

[reporting]
data = "Quarterly numbers"
output_path = "out/quarterly.txt"

[deferred]
delay_ms = 150

[logging]
level = "debug"
format = "json"
"#;

        let config = ShowcaseConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.examples,
            vec![ExampleKind::AsyncAwait, ExampleKind::FactoryMethod]
        );
        assert_eq!(config.transport.planners, vec![Logistics::Sea]);
        assert_eq!(config.reporting.data, "Quarterly numbers");
        assert_eq!(config.reporting.output_path, "out/quarterly.txt");
        assert_eq!(config.delay(), Duration::from_millis(150));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_planner_is_rejected() {
        let toml_content = r#"
[transport]
planners = ["road", "air"]
"#;
        let err = ShowcaseConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, ShowcaseError::TomlParseError(_)));
        assert!(err.to_string().contains("air"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DESIGN_PATTERNS_TEST_REPORT_DATA", "from the environment");

        let toml_content = r#"
[reporting]
data = "${DESIGN_PATTERNS_TEST_REPORT_DATA}"
output_path = "${DESIGN_PATTERNS_TEST_UNSET_VARIABLE}"
"#;

        let config = ShowcaseConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.reporting.data, "from the environment");
        assert_eq!(
            config.reporting.output_path,
            "${DESIGN_PATTERNS_TEST_UNSET_VARIABLE}"
        );

        std::env::remove_var("DESIGN_PATTERNS_TEST_REPORT_DATA");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ShowcaseConfig::default();
        config.deferred.delay_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());

        let mut config = ShowcaseConfig::default();
        config.reporting.output_path.clear();
        assert!(config.validate().is_err());

        let mut config = ShowcaseConfig::default();
        config.transport.planners.clear();
        assert!(config.validate().is_err());

        let mut config = ShowcaseConfig::default();
        config.examples.clear();
        assert!(config.validate().is_err());

        let mut config = ShowcaseConfig::default();
        config.deferred.delay_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[reporting]\ndata = \"file data\"\n")
            .unwrap();

        let config = ShowcaseConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.reporting.data, "file data");
        assert_eq!(config.reporting.output_path, "report.txt");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ShowcaseConfig::from_file("/no/such/config.toml").unwrap_err();
        assert!(matches!(err, ShowcaseError::IoError(_)));
    }
}
