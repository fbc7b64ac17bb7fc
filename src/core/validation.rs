use crate::core::{CertificateArn, CertificateAuthority, Result, ValidationRecord};
use crate::utils::error::ProvisionError;
use crate::utils::retry::{poll_until, PollPolicy};

/// Polls the authority until the DNS validation record has both a name and a
/// value. Describe failures count as attempts that were not ready.
pub async fn await_validation_record<A: CertificateAuthority>(
    authority: &A,
    arn: &CertificateArn,
    policy: &PollPolicy,
) -> Result<ValidationRecord> {
    let record = poll_until(
        policy,
        |attempt| async move {
            tracing::info!(
                "🔎 Fetching DNS validation record (attempt {}/{})",
                attempt,
                policy.max_attempts
            );
            match authority.validation_record(arn).await {
                Ok(record) => record.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!("Describe certificate failed on attempt {}: {}", attempt, e);
                    ValidationRecord::default()
                }
            }
        },
        ValidationRecord::is_complete,
    )
    .await;

    record.ok_or(ProvisionError::ValidationTimeoutError {
        attempts: policy.max_attempts,
    })
}

/// Blocks until the certificate is issued. Any failure is fatal.
pub async fn await_issuance<A: CertificateAuthority>(
    authority: &A,
    arn: &CertificateArn,
) -> Result<()> {
    tracing::info!("⏳ Waiting for certificate {} to be issued", arn);
    authority
        .wait_until_issued(arn)
        .await
        .map_err(|e| match e {
            ProvisionError::ValidationFailedError { .. } => e,
            other => ProvisionError::ValidationFailedError {
                message: other.to_string(),
            },
        })?;
    tracing::info!("✅ Certificate {} issued", arn);
    Ok(())
}
