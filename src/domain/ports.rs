use crate::domain::model::{
    BucketName, CertificateArn, StackParameters, StackState, StackTemplate,
    UpdateOutcome, ValidationRecord,
};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CertificateAuthority: Send + Sync {
    /// Certificate whose domain name matches `domain` exactly, if any.
    async fn find_certificate(&self, domain: &str) -> Result<Option<CertificateArn>>;

    /// Requests a DNS-validated certificate. Returns the raw identifier, which
    /// may be empty.
    async fn request_certificate(&self, domain: &str) -> Result<Option<String>>;

    /// First DNS validation record, possibly with blank fields while the
    /// authority is still generating it.
    async fn validation_record(&self, arn: &CertificateArn) -> Result<Option<ValidationRecord>>;

    /// Blocks until the certificate is issued.
    async fn wait_until_issued(&self, arn: &CertificateArn) -> Result<()>;
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn create_bucket(&self, name: &BucketName) -> Result<()>;
}

#[async_trait]
pub trait StackOrchestrator: Send + Sync {
    async fn stack_state(&self, stack_name: &str) -> Result<StackState>;

    async fn create_stack(
        &self,
        stack_name: &str,
        template: &StackTemplate,
        parameters: &StackParameters,
    ) -> Result<()>;

    async fn update_stack(
        &self,
        stack_name: &str,
        template: &StackTemplate,
        parameters: &StackParameters,
    ) -> Result<UpdateOutcome>;

    async fn wait_until_created(&self, stack_name: &str) -> Result<()>;

    async fn wait_until_updated(&self, stack_name: &str) -> Result<()>;

    async fn stack_output(&self, stack_name: &str, output_key: &str) -> Result<Option<String>>;
}

/// Human-in-the-loop gate between publishing the DNS record and waiting for
/// issuance. Blocks until confirmed.
pub trait OperatorPrompt: Send + Sync {
    fn confirm(&self, record: &ValidationRecord) -> Result<()>;
}

impl<T: OperatorPrompt + ?Sized> OperatorPrompt for Box<T> {
    fn confirm(&self, record: &ValidationRecord) -> Result<()> {
        (**self).confirm(record)
    }
}
