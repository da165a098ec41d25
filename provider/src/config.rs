use crate::error::{self, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use log::debug;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::path::PathBuf;

/// How the provider reaches the cluster that data sources read from.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ProviderConfig {
    /// Path to a kubeconfig file. When absent the default client configuration is used: the
    /// `KUBECONFIG` environment variable, `~/.kube/config` or the in-cluster service account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,

    /// The kubeconfig context to use instead of the current context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Do not create a Kubernetes client at all. Manifests still work; data sources report a
    /// diagnostic.
    #[serde(default)]
    pub offline: bool,
}

impl ProviderConfig {
    /// Creates the Kubernetes client described by this configuration, or `None` when offline.
    pub async fn client(&self) -> Result<Option<Client>> {
        if self.offline {
            debug!("Provider is offline, no Kubernetes client is created");
            return Ok(None);
        }
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        };
        let config = match &self.kubeconfig {
            Some(path) => {
                debug!("Creating Kubernetes client from '{}'", path.display());
                let kubeconfig =
                    Kubeconfig::read_from(path).context(error::ConfigReadSnafu { path })?;
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context(error::ClientCreateKubeconfigSnafu)?
            }
            None if self.context.is_some() => Config::from_kubeconfig(&options)
                .await
                .context(error::ClientCreateKubeconfigSnafu)?,
            None => {
                return Ok(Some(Client::try_default().await.context(
                    error::KubeSnafu {
                        action: "create the default client",
                    },
                )?))
            }
        };
        Ok(Some(Client::try_from(config).context(error::KubeSnafu {
            action: "create client from `Kubeconfig`",
        })?))
    }
}
