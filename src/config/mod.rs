#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{ProvisionError, Result};
use crate::utils::retry::PollPolicy;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use toml_config::SettingsFile;

/// `owner/name` repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = ProvisionError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.split_once('/') {
            Some((owner, name))
                if !owner.trim().is_empty() && !name.trim().is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.trim().to_string(),
                    name: name.trim().to_string(),
                })
            }
            _ => Err(ProvisionError::InvalidConfigValueError {
                field: "github_repo".to_string(),
                value: raw.to_string(),
                reason: "Expected the form owner/name".to_string(),
            }),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Fully resolved settings for one provisioning run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionConfig {
    pub domain_name: String,
    pub repository: Option<RepoSlug>,
    pub stack_name: String,
    pub template_path: PathBuf,
    pub bucket_prefix: String,
    pub region: Option<String>,
    pub poll_policy: PollPolicy,
    pub certificate_wait: Duration,
    pub stack_wait: Duration,
}

impl ProvisionConfig {
    /// Combines the required inputs with a settings file; values passed
    /// explicitly win over the file.
    pub fn from_parts(
        domain_name: String,
        github_repo: Option<&str>,
        settings: SettingsFile,
        template_override: Option<PathBuf>,
        region_override: Option<String>,
    ) -> Result<Self> {
        settings.validate()?;

        let repository = github_repo.map(RepoSlug::from_str).transpose()?;

        let config = Self {
            domain_name,
            repository,
            stack_name: settings.stack.name,
            template_path: template_override
                .unwrap_or_else(|| PathBuf::from(settings.stack.template_path)),
            bucket_prefix: settings.bucket.prefix,
            region: region_override.or(settings.aws.region),
            poll_policy: PollPolicy::new(
                settings.certificate.poll_attempts,
                Duration::from_secs(settings.certificate.poll_interval_seconds),
            ),
            certificate_wait: Duration::from_secs(settings.certificate.wait_minutes * 60),
            stack_wait: Duration::from_secs(settings.stack.wait_minutes * 60),
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults for everything except the domain.
    pub fn for_domain(domain_name: impl Into<String>) -> Result<Self> {
        Self::from_parts(domain_name.into(), None, SettingsFile::default(), None, None)
    }
}

impl Validate for ProvisionConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_domain_name("domain_name", &self.domain_name)?;
        validate_non_empty_string("stack_name", &self.stack_name)?;
        validate_bucket_prefix("bucket_prefix", &self.bucket_prefix)?;
        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }
        validate_range("poll_attempts", self.poll_policy.max_attempts, 1, 1000)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
