// Adapters layer: concrete implementations of the domain ports.

#[cfg(feature = "aws")]
pub mod acm;
#[cfg(feature = "aws")]
pub mod cloudformation;
pub mod prompt;
#[cfg(feature = "aws")]
pub mod s3;

#[cfg(feature = "aws")]
use crate::utils::error::ProvisionError;

#[cfg(feature = "aws")]
fn api_error<E: std::error::Error>(operation: &str, error: E) -> ProvisionError {
    let message = format!(
        "{} failed: {}",
        operation,
        aws_sdk_s3::error::DisplayErrorContext(&error)
    );
    tracing::debug!("{}", message);
    ProvisionError::provisioning(message)
}

#[cfg(feature = "aws")]
pub use acm::AcmCertificates;
#[cfg(feature = "aws")]
pub use cloudformation::CloudFormationStacks;
pub use prompt::{AutoConfirm, ConsolePrompt};
#[cfg(feature = "aws")]
pub use s3::S3Buckets;

/// Builds the three AWS clients from the ambient credential chain.
#[cfg(feature = "aws")]
pub async fn aws_adapters(
    config: &crate::config::ProvisionConfig,
) -> (AcmCertificates, S3Buckets, CloudFormationStacks) {
    use aws_config::BehaviorVersion;
    use aws_sdk_s3::config::Region;

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;
    let region = sdk_config.region().map(|r| r.to_string());
    tracing::debug!("Using AWS region {:?}", region);

    (
        AcmCertificates::new(aws_sdk_acm::Client::new(&sdk_config), config.certificate_wait),
        S3Buckets::new(aws_sdk_s3::Client::new(&sdk_config), region),
        CloudFormationStacks::new(
            aws_sdk_cloudformation::Client::new(&sdk_config),
            config.stack_wait,
        ),
    )
}
