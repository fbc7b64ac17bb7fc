use crate::config::toml_config::SettingsFile;
use crate::config::ProvisionConfig;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "site-provisioner")]
#[command(about = "Provision a TLS certificate, bucket and CDN stack for a static site")]
pub struct CliConfig {
    /// Domain the certificate and distribution are issued for
    #[arg(long, env = "DOMAIN_NAME")]
    pub domain_name: Option<String>,

    /// Source repository as owner/name
    #[arg(long, env = "GITHUB_REPO")]
    pub github_repo: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stack template, overrides the settings file
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// AWS region, overrides the settings file and ambient configuration
    #[arg(long)]
    pub region: Option<String>,

    /// Skip the interactive DNS confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the full provisioning report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_settings(&self) -> Result<SettingsFile> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from {}", path.display());
                SettingsFile::from_file(path)
            }
            None => Ok(SettingsFile::default()),
        }
    }

    pub fn resolve(&self) -> Result<ProvisionConfig> {
        let domain_name = validate_required_field("domain_name", &self.domain_name)?;
        ProvisionConfig::from_parts(
            domain_name.clone(),
            self.github_repo.as_deref(),
            self.load_settings()?,
            self.template.clone(),
            self.region.clone(),
        )
    }
}
