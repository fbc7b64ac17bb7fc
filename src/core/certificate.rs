use crate::core::{CertificateArn, CertificateAuthority, CertificatePlan, Result};
use crate::utils::error::ProvisionError;

/// Certificate to use for the domain and whether it already existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCertificate {
    pub arn: CertificateArn,
    pub reused: bool,
}

/// Reuses the certificate issued for `domain` or requests a new one.
pub async fn resolve_certificate<A: CertificateAuthority>(
    authority: &A,
    domain: &str,
) -> Result<ResolvedCertificate> {
    tracing::debug!("Looking up existing certificates for {}", domain);
    let existing = authority.find_certificate(domain).await?;

    match CertificatePlan::from_lookup(existing) {
        CertificatePlan::Reuse(arn) => {
            tracing::info!("♻️  Reusing certificate {}", arn);
            Ok(ResolvedCertificate { arn, reused: true })
        }
        CertificatePlan::Request => {
            tracing::info!("📜 No certificate for {}, requesting one", domain);
            let raw = authority.request_certificate(domain).await?;
            let arn = raw.and_then(CertificateArn::parse).ok_or_else(|| {
                ProvisionError::provisioning(format!(
                    "certificate request for {} returned no identifier",
                    domain
                ))
            })?;
            tracing::info!("📜 Requested certificate {}", arn);
            Ok(ResolvedCertificate { arn, reused: false })
        }
    }
}
