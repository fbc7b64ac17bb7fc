use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STACK_NAME: &str = "push-tx";
pub const DEFAULT_TEMPLATE_PATH: &str = "template.yaml";
pub const DEFAULT_BUCKET_PREFIX: &str = "push-tx-static-site";
pub const DEFAULT_POLL_ATTEMPTS: u32 = 15;
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 20;
pub const DEFAULT_WAIT_MINUTES: u64 = 60;

/// Optional settings file. Every key falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub stack: StackSettings,
    pub bucket: BucketSettings,
    pub certificate: CertificateSettings,
    pub aws: AwsSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackSettings {
    pub name: String,
    pub template_path: String,
    pub wait_minutes: u64,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_STACK_NAME.to_string(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            wait_minutes: DEFAULT_WAIT_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BucketSettings {
    pub prefix: String,
}

impl Default for BucketSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_BUCKET_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CertificateSettings {
    pub poll_attempts: u32,
    pub poll_interval_seconds: u64,
    pub wait_minutes: u64,
}

impl Default for CertificateSettings {
    fn default() -> Self {
        Self {
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
            poll_interval_seconds: DEFAULT_POLL_INTERVAL_SECONDS,
            wait_minutes: DEFAULT_WAIT_MINUTES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AwsSettings {
    pub region: Option<String>,
}

impl SettingsFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let settings: SettingsFile = toml::from_str(content)?;
        Ok(settings)
    }
}

impl Validate for SettingsFile {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("stack.name", &self.stack.name)?;
        validate_non_empty_string("stack.template_path", &self.stack.template_path)?;
        validate_range("stack.wait_minutes", self.stack.wait_minutes, 1, 720)?;

        validate_bucket_prefix("bucket.prefix", &self.bucket.prefix)?;

        validate_range(
            "certificate.poll_attempts",
            self.certificate.poll_attempts,
            1,
            1000,
        )?;
        validate_range(
            "certificate.poll_interval_seconds",
            self.certificate.poll_interval_seconds,
            0,
            3600,
        )?;
        validate_range(
            "certificate.wait_minutes",
            self.certificate.wait_minutes,
            1,
            4320,
        )?;

        if let Some(region) = &self.aws.region {
            validate_aws_region("aws.region", region)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProvisionError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = SettingsFile::from_str("").unwrap();
        assert_eq!(settings, SettingsFile::default());
        assert_eq!(settings.stack.name, "push-tx");
        assert_eq!(settings.bucket.prefix, "push-tx-static-site");
        assert_eq!(settings.certificate.poll_attempts, 15);
        assert_eq!(settings.certificate.poll_interval_seconds, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let settings = SettingsFile::from_str(
            r#"
[stack]
name = "docs-site"

[certificate]
poll_attempts = 5

[aws]
region = "eu-west-1"
"#,
        )
        .unwrap();

        assert_eq!(settings.stack.name, "docs-site");
        assert_eq!(settings.stack.template_path, "template.yaml");
        assert_eq!(settings.certificate.poll_attempts, 5);
        assert_eq!(settings.certificate.poll_interval_seconds, 20);
        assert_eq!(settings.aws.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = SettingsFile::from_str("[stack]\nnmae = \"typo\"\n");
        assert!(matches!(result, Err(ProvisionError::TomlError(_))));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let mut settings = SettingsFile::default();
        settings.certificate.poll_attempts = 0;
        assert!(settings.validate().is_err());

        let mut settings = SettingsFile::default();
        settings.bucket.prefix = "Bad_Prefix".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bucket]\nprefix = \"my-site\"").unwrap();

        let settings = SettingsFile::from_file(file.path()).unwrap();
        assert_eq!(settings.bucket.prefix, "my-site");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SettingsFile::from_file("/nonexistent/provision.toml");
        assert!(matches!(result, Err(ProvisionError::IoError(_))));
    }
}
