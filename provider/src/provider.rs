use crate::config::ProviderConfig;
use crate::data_source::{CrdDataSource, DataSource, ProviderData, ReadResponse};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::manifest::CrdManifest;
use crate::schema::Schema;
use log::{debug, info};
use model::clients::CrdReader;
use model::sagemaker::*;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

const UNKNOWN_TYPE: &str = "Unknown data source type";

/// Every data source and manifest of the SageMaker resources, keyed by type name.
pub struct Provider {
    data: ProviderData,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SchemaResponse {
    pub schema: Option<Schema>,
    pub diagnostics: Diagnostics,
}

macro_rules! register {
    ($data_sources:ident, $($kind:ty),+ $(,)?) => {
        $(
            $data_sources.push(Box::new(CrdDataSource::<$kind>::new()));
            $data_sources.push(Box::new(CrdManifest::<$kind>::new()));
        )+
    };
}

impl Provider {
    pub fn new(data: ProviderData) -> Self {
        let mut data_sources: Vec<Box<dyn DataSource>> = Vec::new();
        register!(
            data_sources,
            App,
            DataQualityJobDefinition,
            Domain,
            Endpoint,
            EndpointConfig,
            FeatureGroup,
            Model,
            ModelPackageGroup,
            NotebookInstance,
            NotebookInstanceLifecycleConfig,
            TransformJob,
            UserProfile,
        );
        Self {
            data,
            data_sources: data_sources
                .into_iter()
                .map(|data_source| (data_source.type_name(), data_source))
                .collect(),
        }
    }

    /// A provider reading through `reader`, e.g. a `kube::Client`.
    pub fn with_reader(reader: Arc<dyn CrdReader>) -> Self {
        Self::new(ProviderData::new(reader))
    }

    /// A provider without a cluster. Only manifests can be read.
    pub fn offline() -> Self {
        Self::new(ProviderData::offline())
    }

    /// Creates the Kubernetes client described by `config` and a provider that shares it between
    /// all data sources.
    pub async fn configure(config: &ProviderConfig) -> Result<Self> {
        let data = match config.client().await? {
            Some(client) => {
                info!("Provider configured with a Kubernetes client");
                ProviderData::new(Arc::new(client))
            }
            None => ProviderData::offline(),
        };
        Ok(Self::new(data))
    }

    pub fn is_offline(&self) -> bool {
        self.data.reader.is_none()
    }

    /// All type names in alphabetical order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    pub fn schema(&self, type_name: &str) -> SchemaResponse {
        match self.data_sources.get(type_name) {
            Some(data_source) => SchemaResponse {
                schema: Some(data_source.schema()),
                diagnostics: Diagnostics::new(),
            },
            None => SchemaResponse {
                schema: None,
                diagnostics: unknown_type(type_name),
            },
        }
    }

    pub async fn read(&self, type_name: &str, config: &Value) -> ReadResponse {
        match self.data_sources.get(type_name) {
            Some(data_source) => {
                let response = data_source.read(&self.data, config).await;
                debug!(
                    "Read of {} finished with {} diagnostic(s)",
                    type_name,
                    response.diagnostics.len()
                );
                response
            }
            None => ReadResponse::failed(unknown_type(type_name)),
        }
    }
}

fn unknown_type(type_name: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    diagnostics.add_error(
        UNKNOWN_TYPE,
        format!("The provider does not have a data source named '{}'.", type_name),
    );
    diagnostics
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_kind_has_a_data_source_and_a_manifest() {
        let provider = Provider::offline();
        let type_names: Vec<_> = provider.type_names().collect();
        assert_eq!(type_names.len(), 24);
        assert!(type_names.contains(&"k8s_sagemaker_services_k8s_aws_app_v1alpha1"));
        assert!(type_names.contains(&"k8s_sagemaker_services_k8s_aws_app_v1alpha1_manifest"));
        assert!(type_names.contains(
            &"k8s_sagemaker_services_k8s_aws_notebook_instance_lifecycle_config_v1alpha1_manifest"
        ));
        assert!(provider.is_offline());
    }

    #[test]
    fn unknown_schema() {
        let response = Provider::offline().schema("k8s_core_v1_pod");
        assert!(response.schema.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            UNKNOWN_TYPE
        );
    }

    #[tokio::test]
    async fn unknown_read() {
        let response = Provider::offline()
            .read("k8s_core_v1_pod", &json!({}))
            .await;
        assert!(response.state.is_none());
        assert!(response.diagnostics.has_error());
    }

    #[tokio::test]
    async fn manifests_work_offline() {
        let response = Provider::offline()
            .read(
                "k8s_sagemaker_services_k8s_aws_model_package_group_v1alpha1_manifest",
                &json!({
                    "metadata": { "name": "churn", "namespace": "ml" },
                    "spec": { "model_package_group_name": "churn" }
                }),
            )
            .await;
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
        let yaml = response.state.unwrap()["yaml"].as_str().unwrap().to_string();
        assert!(yaml.contains("kind: ModelPackageGroup"));
        assert!(yaml.contains("modelPackageGroupName: churn"));
    }
}
