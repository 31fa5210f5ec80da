use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read '{path}': {source}")]
    InputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected token #{index} but found only {found} token(s) in '{text}'")]
    MissingToken {
        line: usize,
        index: usize,
        found: usize,
        text: String,
    },

    #[error("Line {line}: token '{token}' has no '{delimiter}' delimiter")]
    MissingDelimiter {
        line: usize,
        token: String,
        delimiter: char,
    },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Format,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 退出碼: 1 = 格式錯誤, 2 = 配置錯誤, 3 = 系統/IO 錯誤
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl StatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatError::IoError(_) | StatError::InputError { .. } => ErrorCategory::Input,
            StatError::MissingToken { .. } | StatError::MissingDelimiter { .. } => {
                ErrorCategory::Format
            }
            StatError::InvalidConfigValueError { .. } | StatError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            StatError::SerializationError(_) | StatError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Critical,
            ErrorCategory::Format => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatError::IoError(_) => "Check file permissions and available disk space",
            StatError::InputError { .. } => {
                "Make sure the result file exists; pass its path as the first argument"
            }
            StatError::MissingToken { .. } | StatError::MissingDelimiter { .. } => {
                "Check --record-size, --target-line and --target-token against the log layout"
            }
            StatError::InvalidConfigValueError { .. } | StatError::ConfigValidationError { .. } => {
                "Fix the configuration value and run again"
            }
            StatError::SerializationError(_) | StatError::CsvError(_) => {
                "Try another --format or write to a different --output"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatError::InputError { path, .. } => format!("Result file '{}' could not be read", path),
            StatError::MissingToken { line, .. } | StatError::MissingDelimiter { line, .. } => {
                format!("Malformed statistics line {}: {}", line, self)
            }
            StatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            StatError::ConfigValidationError { field, message } => {
                format!("Invalid configuration '{}': {}", field, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;
