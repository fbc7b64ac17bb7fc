pub mod certificate;
pub mod stack;
pub mod storage;
pub mod validation;
pub mod workflow;

pub use crate::domain::model::{
    BucketName, CertificateArn, CertificatePlan, ProvisionReport,
    StackAction, StackParameters, StackState, StackTemplate, UpdateOutcome, ValidationRecord,
};
pub use crate::domain::ports::{
    CertificateAuthority, ObjectStorage, OperatorPrompt, StackOrchestrator,
};
pub use crate::utils::error::Result;
