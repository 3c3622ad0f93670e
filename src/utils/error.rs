use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },

    #[error("Activity {activity} is full ({max_participants} participants)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Server error: {message}")]
    ServerError { message: String },

    #[error("Activity state is unavailable: {message}")]
    StateUnavailable { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    Request,
    Internal,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SignupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SignupError::ActivityNotFound { .. } | SignupError::NotSignedUp { .. } => {
                ErrorCategory::NotFound
            }
            SignupError::AlreadySignedUp { .. } | SignupError::ActivityFull { .. } => {
                ErrorCategory::Conflict
            }
            SignupError::InvalidRequest { .. } => ErrorCategory::Request,
            SignupError::IoError(_)
            | SignupError::SerializationError(_)
            | SignupError::ServerError { .. }
            | SignupError::StateUnavailable { .. } => ErrorCategory::Internal,
            SignupError::ConfigError { .. }
            | SignupError::ConfigValidationError { .. }
            | SignupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Conflict | ErrorCategory::Request => {
                ErrorSeverity::Low
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => match self {
                SignupError::StateUnavailable { .. } | SignupError::ServerError { .. } => {
                    ErrorSeverity::Critical
                }
                _ => ErrorSeverity::Medium,
            },
        }
    }

    /// 給呼叫端看的訊息，對應 HTTP 回應中的 `detail`
    pub fn user_friendly_message(&self) -> String {
        match self {
            SignupError::ActivityNotFound { .. } => "Activity not found".to_string(),
            SignupError::AlreadySignedUp { .. } => "Student already signed up".to_string(),
            SignupError::NotSignedUp { .. } => {
                "Student is not signed up for this activity".to_string()
            }
            SignupError::ActivityFull { .. } => "Activity is full".to_string(),
            SignupError::InvalidRequest { message } => message.clone(),
            SignupError::IoError(_)
            | SignupError::SerializationError(_)
            | SignupError::ServerError { .. }
            | SignupError::StateUnavailable { .. } => "Internal server error".to_string(),
            SignupError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            SignupError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            SignupError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SignupError::ActivityNotFound { .. } => {
                "List the available activities with GET /activities"
            }
            SignupError::AlreadySignedUp { .. } => "No action needed, the student is enrolled",
            SignupError::NotSignedUp { .. } => "Check the email address and activity name",
            SignupError::ActivityFull { .. } => "Choose another activity or unregister someone",
            SignupError::InvalidRequest { .. } => "Pass the email as a query parameter",
            SignupError::IoError(_) | SignupError::ServerError { .. } => {
                "Check that the address is free and the process has permission to bind it"
            }
            SignupError::SerializationError(_) => "Report this as a bug",
            SignupError::StateUnavailable { .. } => "Restart the service",
            SignupError::ConfigError { .. }
            | SignupError::ConfigValidationError { .. }
            | SignupError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;
