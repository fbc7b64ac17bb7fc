use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Provisioning failed: {message}")]
    ProvisioningError { message: String },

    #[error("DNS validation record not available after {attempts} attempts")]
    ValidationTimeoutError { attempts: u32 },

    #[error("Certificate validation failed: {message}")]
    ValidationFailedError { message: String },

    #[error("Operator confirmation aborted: {message}")]
    ConfirmationAborted { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ProvisionError {
    pub fn provisioning(message: impl Into<String>) -> Self {
        Self::ProvisioningError {
            message: message.into(),
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProvisioningError { .. } => 1,
            Self::ValidationTimeoutError { .. } | Self::ValidationFailedError { .. } => 2,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => 3,
            Self::ConfirmationAborted { .. } | Self::IoError(_) | Self::SerializationError(_) => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ProvisioningError { .. } => {
                "Check the cloud credentials and region, then re-run; existing resources are reused where possible"
            }
            Self::ValidationTimeoutError { .. } => {
                "The certificate authority has not published a validation record yet; inspect the certificate and re-run"
            }
            Self::ValidationFailedError { .. } => {
                "Make sure the CNAME validation record is published in the domain's DNS zone, then re-run"
            }
            Self::ConfirmationAborted { .. } => {
                "Run interactively, or pass --yes once the DNS record is published"
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => "Fix the configuration (flags, environment, or settings file) and re-run",
            Self::IoError(_) => "Check that the referenced files exist and are readable",
            Self::SerializationError(_) => "Re-run without --json to get the plain output",
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
