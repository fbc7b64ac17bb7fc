use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque certificate identifier handed out by the certificate authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateArn(String);

impl CertificateArn {
    /// Returns `None` for a blank identifier.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// DNS record the operator publishes to prove domain ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub name: String,
    pub value: String,
}

impl ValidationRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }
}

/// What the resolver does given the result of the domain lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificatePlan {
    Reuse(CertificateArn),
    Request,
}

impl CertificatePlan {
    pub fn from_lookup(existing: Option<CertificateArn>) -> Self {
        match existing {
            Some(arn) => Self::Reuse(arn),
            None => Self::Request,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketName(String);

impl BucketName {
    pub const SUFFIX_LEN: usize = 8;

    /// `<prefix>-<suffix>`; the suffix is expected to be lowercase hex.
    pub fn with_suffix(prefix: &str, suffix: &str) -> Self {
        Self(format!("{}-{}", prefix, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the named stack exists, as reported by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackState {
    Absent,
    Existing { status: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackAction {
    Create,
    Update,
}

impl StackAction {
    pub fn for_state(state: &StackState) -> Self {
        match state {
            StackState::Absent => Self::Create,
            StackState::Existing { .. } => Self::Update,
        }
    }
}

/// Result of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Started,
    /// The orchestrator found nothing to change; the stack is already settled.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackParameters {
    pub domain_name: String,
    pub certificate_arn: CertificateArn,
}

impl StackParameters {
    pub const DOMAIN_NAME_KEY: &'static str = "DomainName";
    pub const CERTIFICATE_ARN_KEY: &'static str = "CertificateArn";

    /// Key/value pairs in template parameter form.
    pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (Self::DOMAIN_NAME_KEY, self.domain_name.clone()),
            (
                Self::CERTIFICATE_ARN_KEY,
                self.certificate_arn.as_str().to_string(),
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTemplate {
    pub body: String,
}

impl StackTemplate {
    pub const DISTRIBUTION_OUTPUT_KEY: &'static str = "CloudFrontDistributionDomainName";

    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Everything the workflow produced, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub domain_name: String,
    pub certificate_arn: CertificateArn,
    pub certificate_reused: bool,
    pub validation_record: ValidationRecord,
    pub bucket_name: BucketName,
    pub stack_name: String,
    pub stack_action: StackAction,
    pub distribution_domain_name: String,
}
