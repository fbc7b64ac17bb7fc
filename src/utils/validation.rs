use crate::utils::error::{ProvisionError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(\*\.)?([a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?\.)+([a-z]{2,63}|xn--[a-z0-9-]{1,59})$",
        )
        .expect("domain name pattern is valid")
    })
}

pub fn validate_domain_name(field_name: &str, domain: &str) -> Result<()> {
    validate_non_empty_string(field_name, domain)?;

    if domain.len() > 253 {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Domain name cannot be longer than 253 characters".to_string(),
        });
    }

    if !domain_pattern().is_match(domain) {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Expected a lowercase fully qualified domain name such as example.com"
                .to_string(),
        });
    }

    Ok(())
}

/// Bucket prefixes must leave room for the `-xxxxxxxx` suffix within the
/// 63 character bucket name limit.
pub fn validate_bucket_prefix(field_name: &str, prefix: &str) -> Result<()> {
    validate_non_empty_string(field_name, prefix)?;

    if prefix.len() < 3 || prefix.len() > 54 {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Bucket prefix must be between 3 and 54 characters".to_string(),
        });
    }

    if !prefix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Bucket prefix can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    if prefix.starts_with('-') {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Bucket prefix cannot start with a hyphen".to_string(),
        });
    }

    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ProvisionError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProvisionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_name() {
        assert!(validate_domain_name("domain_name", "example.com").is_ok());
        assert!(validate_domain_name("domain_name", "www.push-tx.example.org").is_ok());
        assert!(validate_domain_name("domain_name", "*.example.com").is_ok());
        assert!(validate_domain_name("domain_name", "example.xn--p1ai").is_ok());
        assert!(validate_domain_name("domain_name", "xn--80ak6aa92e.xn--p1ai").is_ok());
        assert!(validate_domain_name("domain_name", "example.c0m").is_err());
        assert!(validate_domain_name("domain_name", "").is_err());
        assert!(validate_domain_name("domain_name", "localhost").is_err());
        assert!(validate_domain_name("domain_name", "Example.com").is_err());
        assert!(validate_domain_name("domain_name", "-bad.example.com").is_err());
    }

    #[test]
    fn test_validate_bucket_prefix() {
        assert!(validate_bucket_prefix("bucket.prefix", "push-tx-static-site").is_ok());
        assert!(validate_bucket_prefix("bucket.prefix", "ab").is_err());
        assert!(validate_bucket_prefix("bucket.prefix", "Push_TX").is_err());
        assert!(validate_bucket_prefix("bucket.prefix", "-site").is_err());
        assert!(validate_bucket_prefix("bucket.prefix", &"a".repeat(55)).is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("aws.region", "us-east-1").is_ok());
        assert!(validate_aws_region("aws.region", "US_EAST").is_err());
        assert!(validate_aws_region("aws.region", " ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("certificate.poll_attempts", 15, 1, 100).is_ok());
        assert!(validate_range("certificate.poll_attempts", 0, 1, 100).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("domain_name", &missing),
            Err(ProvisionError::MissingConfigError { .. })
        ));
        let present = Some("example.com".to_string());
        assert_eq!(
            validate_required_field("domain_name", &present).unwrap(),
            "example.com"
        );
    }
}
