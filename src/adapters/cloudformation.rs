use crate::adapters::api_error;
use crate::core::{
    Result, StackOrchestrator, StackParameters, StackState, StackTemplate, UpdateOutcome,
};
use crate::utils::error::ProvisionError;
use async_trait::async_trait;
use aws_sdk_cloudformation::client::Waiters;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::types::{Parameter, Stack};
use aws_sdk_cloudformation::Client as CfnClient;
use std::time::Duration;

// CloudFormation reports these through the generic ValidationError code.
const VALIDATION_ERROR_CODE: &str = "ValidationError";
const MISSING_STACK_MESSAGE: &str = "does not exist";
const NO_UPDATES_MESSAGE: &str = "No updates are to be performed";

#[derive(Debug, Clone)]
pub struct CloudFormationStacks {
    client: CfnClient,
    max_wait: Duration,
}

impl CloudFormationStacks {
    pub fn new(client: CfnClient, max_wait: Duration) -> Self {
        Self { client, max_wait }
    }
}

fn is_validation_error<E: ProvideErrorMetadata>(error: &E, message_fragment: &str) -> bool {
    error.code() == Some(VALIDATION_ERROR_CODE)
        && error
            .message()
            .is_some_and(|message| message.contains(message_fragment))
}

fn first_stack_status(stacks: &[Stack]) -> String {
    stacks
        .first()
        .and_then(|stack| stack.stack_status().map(|status| status.as_str().to_string()))
        .unwrap_or_default()
}

fn template_parameters(parameters: &StackParameters) -> Vec<Parameter> {
    parameters
        .as_pairs()
        .into_iter()
        .map(|(key, value)| {
            Parameter::builder()
                .parameter_key(key)
                .parameter_value(value)
                .build()
        })
        .collect()
}

#[async_trait]
impl StackOrchestrator for CloudFormationStacks {
    async fn stack_state(&self, stack_name: &str) -> Result<StackState> {
        match self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
        {
            Ok(output) => {
                Ok(StackState::Existing {
                    status: first_stack_status(output.stacks()),
                })
            }
            Err(e) => match e.as_service_error() {
                Some(service) if is_validation_error(service, MISSING_STACK_MESSAGE) => {
                    Ok(StackState::Absent)
                }
                _ => Err(api_error("cloudformation:DescribeStacks", e)),
            },
        }
    }

    async fn create_stack(
        &self,
        stack_name: &str,
        template: &StackTemplate,
        parameters: &StackParameters,
    ) -> Result<()> {
        self.client
            .create_stack()
            .stack_name(stack_name)
            .template_body(&template.body)
            .set_parameters(Some(template_parameters(parameters)))
            .send()
            .await
            .map_err(|e| api_error("cloudformation:CreateStack", e))?;
        Ok(())
    }

    async fn update_stack(
        &self,
        stack_name: &str,
        template: &StackTemplate,
        parameters: &StackParameters,
    ) -> Result<UpdateOutcome> {
        let result = self
            .client
            .update_stack()
            .stack_name(stack_name)
            .template_body(&template.body)
            .set_parameters(Some(template_parameters(parameters)))
            .send()
            .await;

        match result {
            Ok(_) => Ok(UpdateOutcome::Started),
            Err(e) => match e.as_service_error() {
                Some(service) if is_validation_error(service, NO_UPDATES_MESSAGE) => {
                    Ok(UpdateOutcome::Unchanged)
                }
                _ => Err(api_error("cloudformation:UpdateStack", e)),
            },
        }
    }

    async fn wait_until_created(&self, stack_name: &str) -> Result<()> {
        self.client
            .wait_until_stack_create_complete()
            .stack_name(stack_name)
            .wait(self.max_wait)
            .await
            .map_err(|e| ProvisionError::provisioning(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    async fn wait_until_updated(&self, stack_name: &str) -> Result<()> {
        self.client
            .wait_until_stack_update_complete()
            .stack_name(stack_name)
            .wait(self.max_wait)
            .await
            .map_err(|e| ProvisionError::provisioning(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    async fn stack_output(&self, stack_name: &str, output_key: &str) -> Result<Option<String>> {
        let output = self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| api_error("cloudformation:DescribeStacks", e))?;

        let value = output
            .stacks()
            .first()
            .map(|stack| stack.outputs())
            .unwrap_or_default()
            .iter()
            .find(|output| output.output_key() == Some(output_key))
            .and_then(|output| output.output_value())
            .map(str::to_string);

        Ok(value)
    }
}
