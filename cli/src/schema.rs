use crate::diagnostics::fail_on_error;
use anyhow::{Context, Result};
use clap::Parser;
use provider::Provider;

/// Print the schema of a data source or manifest as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    /// The type name, e.g. `k8s_sagemaker_services_k8s_aws_model_v1alpha1`.
    type_name: String,
}

impl Schema {
    pub(crate) async fn run(self, provider: Provider) -> Result<()> {
        let response = provider.schema(&self.type_name);
        fail_on_error(&response.diagnostics)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&response.schema)
                .context("Could not create string from schema.")?
        );
        Ok(())
    }
}
