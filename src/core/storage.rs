use crate::core::{BucketName, ObjectStorage, Result};

/// Random lowercase hex suffix, `BucketName::SUFFIX_LEN` characters long.
pub fn random_suffix() -> String {
    let bytes: [u8; BucketName::SUFFIX_LEN / 2] = rand::random();
    hex::encode(bytes)
}

pub fn generate_bucket_name(prefix: &str) -> BucketName {
    BucketName::with_suffix(prefix, &random_suffix())
}

/// Always creates a fresh bucket; names are never looked up or reused.
pub async fn provision_bucket<S: ObjectStorage>(storage: &S, prefix: &str) -> Result<BucketName> {
    let name = generate_bucket_name(prefix);
    tracing::info!("🪣 Creating bucket {}", name);
    storage.create_bucket(&name).await?;
    tracing::info!("✅ Bucket {} created", name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_name_shape() {
        let name = generate_bucket_name("push-tx-static-site");
        let suffix = name
            .as_str()
            .strip_prefix("push-tx-static-site-")
            .expect("prefix kept");

        assert_eq!(suffix.len(), 8);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_suffixes_differ_between_runs() {
        let first = random_suffix();
        let names: Vec<String> = (0..8).map(|_| random_suffix()).collect();
        assert!(names.iter().any(|name| name != &first));
    }
}
