use crate::adapters::api_error;
use crate::core::{CertificateArn, CertificateAuthority, Result, ValidationRecord};
use crate::utils::error::ProvisionError;
use async_trait::async_trait;
use aws_sdk_acm::client::Waiters;
use aws_sdk_acm::error::DisplayErrorContext;
use aws_sdk_acm::types::ValidationMethod;
use aws_sdk_acm::Client as AcmClient;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AcmCertificates {
    client: AcmClient,
    max_wait: Duration,
}

impl AcmCertificates {
    pub fn new(client: AcmClient, max_wait: Duration) -> Self {
        Self { client, max_wait }
    }
}

#[async_trait]
impl CertificateAuthority for AcmCertificates {
    async fn find_certificate(&self, domain: &str) -> Result<Option<CertificateArn>> {
        let mut pages = self.client.list_certificates().into_paginator().send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| api_error("acm:ListCertificates", e))?;
            let found = page
                .certificate_summary_list()
                .iter()
                .filter(|summary| summary.domain_name() == Some(domain))
                .find_map(|summary| summary.certificate_arn().and_then(CertificateArn::parse));
            if found.is_some() {
                return Ok(found);
            }
        }

        Ok(None)
    }

    async fn request_certificate(&self, domain: &str) -> Result<Option<String>> {
        let output = self
            .client
            .request_certificate()
            .domain_name(domain)
            .validation_method(ValidationMethod::Dns)
            .send()
            .await
            .map_err(|e| api_error("acm:RequestCertificate", e))?;

        Ok(output.certificate_arn().map(str::to_string))
    }

    async fn validation_record(&self, arn: &CertificateArn) -> Result<Option<ValidationRecord>> {
        let output = self
            .client
            .describe_certificate()
            .certificate_arn(arn.as_str())
            .send()
            .await
            .map_err(|e| api_error("acm:DescribeCertificate", e))?;

        let record = output
            .certificate()
            .and_then(|detail| detail.domain_validation_options().first())
            .and_then(|validation| validation.resource_record())
            .map(|rr| ValidationRecord::new(rr.name(), rr.value()));

        Ok(record)
    }

    async fn wait_until_issued(&self, arn: &CertificateArn) -> Result<()> {
        self.client
            .wait_until_certificate_validated()
            .certificate_arn(arn.as_str())
            .wait(self.max_wait)
            .await
            .map_err(|e| ProvisionError::ValidationFailedError {
                message: format!("{} did not validate: {}", arn, DisplayErrorContext(&e)),
            })?;
        Ok(())
    }
}
