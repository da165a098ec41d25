use crate::config_file::read_config;
use crate::diagnostics::fail_on_error;
use anyhow::{Context, Result};
use clap::Parser;
use provider::Provider;
use std::path::PathBuf;

/// Run the `Read` of a data source or manifest and print its state as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Read {
    /// The type name, e.g. `k8s_sagemaker_services_k8s_aws_model_v1alpha1`.
    type_name: String,

    /// Path to a YAML or JSON file holding the configuration, with snake_case attribute names.
    #[clap(long = "config", short = 'f')]
    config: PathBuf,
}

impl Read {
    pub(crate) async fn run(self, provider: Provider) -> Result<()> {
        let config = read_config(&self.config).await?;
        let response = provider.read(&self.type_name, &config).await;
        fail_on_error(&response.diagnostics)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&response.state)
                .context("Could not create string from state.")?
        );
        Ok(())
    }
}
