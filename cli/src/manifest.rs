use crate::config_file::read_config;
use crate::diagnostics::fail_on_error;
use anyhow::{Context, Result};
use clap::Parser;
use provider::Provider;
use std::path::PathBuf;

const MANIFEST_SUFFIX: &str = "_manifest";

/// Render the configuration of a manifest and print only the YAML document.
#[derive(Debug, Parser)]
pub(crate) struct Manifest {
    /// The manifest type name. The `_manifest` suffix may be left out, e.g.
    /// `k8s_sagemaker_services_k8s_aws_model_v1alpha1`.
    type_name: String,

    /// Path to a YAML or JSON file holding the configuration, with snake_case attribute names.
    #[clap(long = "config", short = 'f')]
    config: PathBuf,
}

impl Manifest {
    pub(crate) async fn run(self, provider: Provider) -> Result<()> {
        let type_name = if self.type_name.ends_with(MANIFEST_SUFFIX) {
            self.type_name
        } else {
            format!("{}{}", self.type_name, MANIFEST_SUFFIX)
        };
        let config = read_config(&self.config).await?;
        let response = provider.read(&type_name, &config).await;
        fail_on_error(&response.diagnostics)?;
        let yaml = response
            .state
            .as_ref()
            .and_then(|state| state["yaml"].as_str())
            .context("The manifest did not render a YAML document")?;
        print!("{}", yaml);
        Ok(())
    }
}
