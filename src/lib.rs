pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{AutoConfirm, ConsolePrompt};
pub use config::ProvisionConfig;
pub use core::workflow::{ProvisioningWorkflow, WorkflowStage};
pub use domain::model::{ProvisionReport, StackTemplate};
pub use utils::error::{ProvisionError, Result};
