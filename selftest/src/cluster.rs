use crate::test_settings::TestSettings;
use anyhow::{format_err, Context, Result};
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{
    api::PostParams,
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config,
};
use log::{debug, info};
use model::SageMakerResource;
use std::convert::TryInto;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

pub const KUBECONFIG_FILENAME: &str = "kubeconfig.yaml";

/// Represents a `kind` cluster. The `Drop` trait is implemented deleting the `kind` cluster when it
/// goes out of scope.
#[derive(Debug)]
pub struct Cluster {
    name: String,
    kubeconfig_dir: TempDir,
}

impl Cluster {
    /// Creates a `Cluster` while initializing a kind cluster. If a cluster named `cluster_name`
    ///  already exists, it will be deleted.
    pub fn new(cluster_name: &str) -> Result<Cluster> {
        let kubeconfig_dir = TempDir::new()?;
        Self::delete_kind_cluster(cluster_name)?;
        Self::create_kind_cluster(
            cluster_name,
            &kubeconfig_dir.path().join(KUBECONFIG_FILENAME),
        )?;
        Ok(Self {
            name: cluster_name.into(),
            kubeconfig_dir,
        })
    }

    /// Returns the path to the kubeconfig file in the `TempDir` created for the cluster.
    pub fn kubeconfig(&self) -> PathBuf {
        self.kubeconfig_dir.path().join(KUBECONFIG_FILENAME)
    }

    /// Create the k8s client for the cluster.
    pub async fn k8s_client(&self) -> Result<Client> {
        let kubeconfig = Kubeconfig::read_from(self.kubeconfig())?;
        let config =
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
        Ok(config.try_into()?)
    }

    /// Creates the CRD of every SageMaker resource and waits until the API server serves them.
    pub async fn install_crds(&self) -> Result<()> {
        let crd_api = Api::<CustomResourceDefinition>::all(self.k8s_client().await?);
        let crds = model::sagemaker::crds();
        for crd in &crds {
            crd_api
                .create(&PostParams::default(), crd)
                .await
                .with_context(|| {
                    format!(
                        "Unable to create CRD '{}'",
                        crd.metadata.name.as_deref().unwrap_or_default()
                    )
                })?;
        }
        let timeout = Duration::from_secs(TestSettings::crd_timeout_secs());
        tokio::time::timeout(timeout, async {
            for crd in &crds {
                let name = crd.metadata.name.clone().unwrap_or_default();
                while !Self::is_established(&crd_api, &name).await? {
                    debug!("Waiting for CRD '{}'", name);
                    tokio::time::sleep(Duration::from_millis(500)).await;
                }
            }
            Ok::<(), anyhow::Error>(())
        })
        .await
        .context("Timed out waiting for the CRDs to be established")??;
        info!("Installed {} CRDs", crds.len());
        Ok(())
    }

    /// Creates a namespace for the objects of a test.
    pub async fn create_namespace(&self, namespace: &str) -> Result<()> {
        Api::<Namespace>::all(self.k8s_client().await?)
            .create(
                &PostParams::default(),
                &Namespace {
                    metadata: ObjectMeta {
                        name: Some(namespace.to_string()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .with_context(|| format!("Unable to create namespace '{}'", namespace))?;
        Ok(())
    }

    /// Creates `object` in its namespace.
    pub async fn create<K>(&self, object: &K) -> Result<K>
    where
        K: SageMakerResource,
    {
        let api = Api::<K>::namespaced(self.k8s_client().await?, object.object_namespace());
        api.create(&PostParams::default(), object)
            .await
            .with_context(|| format!("Unable to create '{}'", object.object_name()))
    }

    async fn is_established(
        crd_api: &Api<CustomResourceDefinition>,
        name: &str,
    ) -> Result<bool> {
        let crd = crd_api.get(name).await?;
        Ok(crd
            .status
            .and_then(|status| status.conditions)
            .unwrap_or_default()
            .iter()
            .any(|condition| condition.type_ == "Established" && condition.status == "True"))
    }

    fn create_kind_cluster(name: &str, kubeconfig: &Path) -> Result<()> {
        let output = Command::new(TestSettings::kind_path())
            .arg("--kubeconfig")
            .arg(kubeconfig.to_str().ok_or_else(|| {
                format_err!("non utf-8 path '{}'", kubeconfig.to_string_lossy())
            })?)
            .arg("create")
            .arg("cluster")
            .arg("--name")
            .arg(name)
            .output()?;
        if !output.status.success() {
            return Err(format_err!(
                "'kind create cluster failed' with exit status '{}'\n\n{}\n\n{}",
                output.status.code().unwrap_or(1),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            ));
        }
        Ok(())
    }

    fn delete_kind_cluster(name: &str) -> Result<()> {
        let output = Command::new(TestSettings::kind_path())
            .arg("delete")
            .arg("cluster")
            .arg("--name")
            .arg(name)
            .output()?;
        if !output.status.success() {
            return Err(format_err!(
                "'kind delete cluster' failed with exit status '{}'\n\n{}\n\n{}",
                output.status.code().unwrap_or(1),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            ));
        }
        Ok(())
    }
}

impl Drop for Cluster {
    fn drop(&mut self) {
        if let Err(e) = Self::delete_kind_cluster(&self.name) {
            eprintln!("unable to delete kind cluster '{}': {}", self.name, e)
        }
    }
}
