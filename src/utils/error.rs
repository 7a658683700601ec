use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown logistics planner: {name}")]
    UnknownPlanner { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Persistence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ShowcaseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShowcaseError::IoError(_) => ErrorCategory::Persistence,
            ShowcaseError::TomlParseError(_)
            | ShowcaseError::ConfigValidationError { .. }
            | ShowcaseError::InvalidConfigValueError { .. }
            | ShowcaseError::UnknownPlanner { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Persistence => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShowcaseError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Make sure the directory of the report path exists".to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Choose a report path you have write access to".to_string()
                }
                _ => "Check the report path and available disk space".to_string(),
            },
            ShowcaseError::TomlParseError(_) => {
                "Make sure the config file is valid TOML".to_string()
            }
            ShowcaseError::ConfigValidationError { field, .. }
            | ShowcaseError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the config or on the command line", field)
            }
            ShowcaseError::UnknownPlanner { .. } => {
                "Valid planners are: road, sea".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShowcaseError::IoError(e) => format!("Could not persist the report: {}", e),
            ShowcaseError::TomlParseError(_) => "Could not read the configuration file".to_string(),
            ShowcaseError::ConfigValidationError { field, message } => {
                format!("Invalid configuration for {}: {}", field, message)
            }
            ShowcaseError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid value '{}' for {}: {}", value, field, reason)
            }
            ShowcaseError::UnknownPlanner { name } => {
                format!("'{}' is not a known logistics planner", name)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
