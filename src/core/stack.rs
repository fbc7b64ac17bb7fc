use crate::core::{
    Result, StackAction, StackOrchestrator, StackParameters, StackTemplate, UpdateOutcome,
};
use crate::utils::error::ProvisionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedStack {
    pub action: StackAction,
    pub distribution_domain_name: String,
}

/// Creates the stack when absent, updates it otherwise, then reads the
/// distribution hostname from its outputs.
pub async fn provision_stack<O: StackOrchestrator>(
    orchestrator: &O,
    stack_name: &str,
    template: &StackTemplate,
    parameters: &StackParameters,
) -> Result<ProvisionedStack> {
    let state = orchestrator.stack_state(stack_name).await?;
    let action = StackAction::for_state(&state);
    tracing::debug!("Stack {} is {:?}, planning {:?}", stack_name, state, action);

    match action {
        StackAction::Create => {
            tracing::info!("🏗️  Creating stack {}", stack_name);
            orchestrator
                .create_stack(stack_name, template, parameters)
                .await?;
            orchestrator
                .wait_until_created(stack_name)
                .await
                .map_err(|e| stack_failure(stack_name, "creation", e))?;
            tracing::info!("✅ Stack {} created", stack_name);
        }
        StackAction::Update => {
            tracing::info!("🔧 Updating stack {}", stack_name);
            match orchestrator
                .update_stack(stack_name, template, parameters)
                .await?
            {
                UpdateOutcome::Started => {
                    orchestrator
                        .wait_until_updated(stack_name)
                        .await
                        .map_err(|e| stack_failure(stack_name, "update", e))?;
                    tracing::info!("✅ Stack {} updated", stack_name);
                }
                UpdateOutcome::Unchanged => {
                    tracing::info!("Stack {} already up to date", stack_name);
                }
            }
        }
    }

    let distribution_domain_name = orchestrator
        .stack_output(stack_name, StackTemplate::DISTRIBUTION_OUTPUT_KEY)
        .await?
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            ProvisionError::provisioning(format!(
                "stack {} has no {} output",
                stack_name,
                StackTemplate::DISTRIBUTION_OUTPUT_KEY
            ))
        })?;

    Ok(ProvisionedStack {
        action,
        distribution_domain_name,
    })
}

fn stack_failure(stack_name: &str, phase: &str, error: ProvisionError) -> ProvisionError {
    match error {
        ProvisionError::ProvisioningError { message } => ProvisionError::provisioning(format!(
            "stack {} {} did not complete: {}",
            stack_name, phase, message
        )),
        other => other,
    }
}
