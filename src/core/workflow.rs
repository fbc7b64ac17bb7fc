use crate::config::ProvisionConfig;
use crate::core::certificate::resolve_certificate;
use crate::core::stack::provision_stack;
use crate::core::storage::provision_bucket;
use crate::core::validation::{await_issuance, await_validation_record};
use crate::core::{
    CertificateAuthority, ObjectStorage, OperatorPrompt, ProvisionReport, Result,
    StackOrchestrator, StackParameters, StackTemplate,
};
use std::fmt;

/// Stages of a provisioning run, in the order they are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Start,
    CertificateResolved,
    ValidationRecordObtained,
    OperatorConfirmed,
    CertificateIssued,
    BucketCreated,
    StackComplete,
    OutputPrinted,
}

impl WorkflowStage {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::CertificateResolved),
            Self::CertificateResolved => Some(Self::ValidationRecordObtained),
            Self::ValidationRecordObtained => Some(Self::OperatorConfirmed),
            Self::OperatorConfirmed => Some(Self::CertificateIssued),
            Self::CertificateIssued => Some(Self::BucketCreated),
            Self::BucketCreated => Some(Self::StackComplete),
            Self::StackComplete => Some(Self::OutputPrinted),
            Self::OutputPrinted => None,
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub struct ProvisioningWorkflow<A, S, O, P>
where
    A: CertificateAuthority,
    S: ObjectStorage,
    O: StackOrchestrator,
    P: OperatorPrompt,
{
    certificates: A,
    storage: S,
    stacks: O,
    prompt: P,
    config: ProvisionConfig,
}

impl<A, S, O, P> ProvisioningWorkflow<A, S, O, P>
where
    A: CertificateAuthority,
    S: ObjectStorage,
    O: StackOrchestrator,
    P: OperatorPrompt,
{
    pub fn new(certificates: A, storage: S, stacks: O, prompt: P, config: ProvisionConfig) -> Self {
        Self {
            certificates,
            storage,
            stacks,
            prompt,
            config,
        }
    }

    /// Runs every stage in order. On failure the stage that was in progress
    /// is logged and nothing created so far is rolled back.
    pub async fn run(&self, template: &StackTemplate) -> Result<ProvisionReport> {
        let mut stage = WorkflowStage::Start;
        match self.run_stages(template, &mut stage).await {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::error!(
                    "❌ Provisioning aborted after stage {}: {}",
                    stage,
                    e
                );
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        template: &StackTemplate,
        stage: &mut WorkflowStage,
    ) -> Result<ProvisionReport> {
        let domain = self.config.domain_name.as_str();
        tracing::info!("🚀 Provisioning static site for {}", domain);
        if let Some(repository) = &self.config.repository {
            tracing::debug!(
                "Repository owner={} name={}",
                repository.owner,
                repository.name
            );
        }

        let certificate = resolve_certificate(&self.certificates, domain).await?;
        advance(stage);

        let record =
            await_validation_record(&self.certificates, &certificate.arn, &self.config.poll_policy)
                .await?;
        tracing::info!(
            "📝 DNS validation record: {} CNAME {}",
            record.name,
            record.value
        );
        advance(stage);

        self.prompt.confirm(&record)?;
        advance(stage);

        await_issuance(&self.certificates, &certificate.arn).await?;
        advance(stage);

        let bucket_name = provision_bucket(&self.storage, &self.config.bucket_prefix).await?;
        advance(stage);

        let parameters = StackParameters {
            domain_name: domain.to_string(),
            certificate_arn: certificate.arn.clone(),
        };
        let stack =
            provision_stack(&self.stacks, &self.config.stack_name, template, &parameters).await?;
        advance(stage);

        tracing::info!(
            "🌐 Distribution domain name: {}",
            stack.distribution_domain_name
        );

        Ok(ProvisionReport {
            domain_name: domain.to_string(),
            certificate_arn: certificate.arn,
            certificate_reused: certificate.reused,
            validation_record: record,
            bucket_name,
            stack_name: self.config.stack_name.clone(),
            stack_action: stack.action,
            distribution_domain_name: stack.distribution_domain_name,
        })
    }
}

fn advance(stage: &mut WorkflowStage) {
    if let Some(next) = stage.next() {
        tracing::debug!("Stage {} -> {}", stage, next);
        *stage = next;
    }
}
