use crate::adapters::api_error;
use crate::core::{BucketName, ObjectStorage, Result};
use async_trait::async_trait;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client as S3Client;

/// Region that must not be sent as a location constraint.
const DEFAULT_S3_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct S3Buckets {
    client: S3Client,
    region: Option<String>,
}

impl S3Buckets {
    pub fn new(client: S3Client, region: Option<String>) -> Self {
        Self { client, region }
    }
}

#[async_trait]
impl ObjectStorage for S3Buckets {
    async fn create_bucket(&self, name: &BucketName) -> Result<()> {
        let mut request = self.client.create_bucket().bucket(name.as_str());

        if let Some(region) = self.region.as_deref().filter(|r| *r != DEFAULT_S3_REGION) {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }

        request
            .send()
            .await
            .map_err(|e| api_error("s3:CreateBucket", e))?;
        Ok(())
    }
}
