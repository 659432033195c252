use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Report write failed: {0}")]
    OutputError(std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Batch processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VerifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VerifierError::MissingConfigError { .. }
            | VerifierError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            VerifierError::IoError(_) => ErrorCategory::Io,
            VerifierError::OutputError(_)
            | VerifierError::CsvError(_)
            | VerifierError::SerializationError(_) => ErrorCategory::Output,
            VerifierError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VerifierError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            VerifierError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            VerifierError::IoError(e) => format!("Could not read the address list: {}", e),
            VerifierError::OutputError(e) => {
                format!("Could not write the validation report: {}", e)
            }
            VerifierError::CsvError(_) | VerifierError::SerializationError(_) => {
                "Could not render the validation report".to_string()
            }
            VerifierError::ProcessingError { message } => {
                format!("Batch validation aborted: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        if let VerifierError::OutputError(_) = self {
            return "Check that the output destination is still open and writable";
        }

        match self.category() {
            ErrorCategory::Configuration => "Check the command-line arguments and try again",
            ErrorCategory::Io => "Make sure the input file exists and is readable",
            ErrorCategory::Output => "Try a different --format",
            ErrorCategory::Processing => "Re-run with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifierError>;
