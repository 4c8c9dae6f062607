use thiserror::Error;

#[derive(Error, Debug)]
pub enum KlaviyoError {
    #[error("Unable to determine the model type.")]
    MissingModelType,

    #[error("{key} is not a valid special Klaviyo attribute.")]
    InvalidSpecialAttributeKey { key: String },

    #[error("{key} is a required special attribute and cannot be deleted.")]
    CannotDeleteRequiredAttribute { key: String },

    #[error("Required field '{field}' is missing for {model} model")]
    RequiredFieldMissing { model: String, field: String },

    #[error("Field '{field}' of {model} model must be {expected}")]
    InvalidFieldType {
        model: String,
        field: String,
        expected: String,
    },

    #[error("Invalid date in field '{field}': {value}")]
    InvalidDate { field: String, value: String },

    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
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
    Model,
    Attribute,
    Payload,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KlaviyoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KlaviyoError::MissingModelType
            | KlaviyoError::RequiredFieldMissing { .. }
            | KlaviyoError::InvalidFieldType { .. }
            | KlaviyoError::InvalidDate { .. } => ErrorCategory::Model,
            KlaviyoError::InvalidSpecialAttributeKey { .. }
            | KlaviyoError::CannotDeleteRequiredAttribute { .. } => ErrorCategory::Attribute,
            KlaviyoError::InvalidPayload { .. } | KlaviyoError::SerializationError(_) => {
                ErrorCategory::Payload
            }
            KlaviyoError::ConfigValidationError { .. }
            | KlaviyoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KlaviyoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 屬性操作失敗不影響模型本身
            ErrorCategory::Attribute => ErrorSeverity::Medium,
            ErrorCategory::Model | ErrorCategory::Payload | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KlaviyoError::MissingModelType => {
                "Add an \"object\" field to the payload or pass an explicit model type".to_string()
            }
            KlaviyoError::InvalidSpecialAttributeKey { .. } => {
                "Use one of the special attribute keys, e.g. $email or $first_name".to_string()
            }
            KlaviyoError::CannotDeleteRequiredAttribute { key } => {
                format!("Update '{}' with a new value instead of deleting it", key)
            }
            KlaviyoError::RequiredFieldMissing { field, .. } => {
                format!("Make sure the payload contains '{}'", field)
            }
            KlaviyoError::InvalidFieldType { field, expected, .. } => {
                format!("Check that '{}' is {} in the payload", field, expected)
            }
            KlaviyoError::InvalidDate { .. } => {
                "Dates must look like 2017-03-29 18:59:41 or RFC 3339".to_string()
            }
            KlaviyoError::InvalidPayload { .. } | KlaviyoError::SerializationError(_) => {
                "Make sure the payload is a valid JSON object".to_string()
            }
            KlaviyoError::IoError(_) => "Check the file path and permissions".to_string(),
            KlaviyoError::ConfigValidationError { .. }
            | KlaviyoError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Model => format!("Could not build the model: {}", self),
            ErrorCategory::Attribute => format!("Attribute operation rejected: {}", self),
            ErrorCategory::Payload => format!("Could not read the payload: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, KlaviyoError>;
