use crate::diagnostics::Diagnostics;
use crate::naming::data_source_type_name;
use crate::schema::{btree, metadata_attribute, spec_attribute, to_state, Attribute};
use crate::schema::{AttributeType, Mode, Schema};
use async_trait::async_trait;
use log::debug;
use model::clients::{CrdClient, CrdReader, HttpStatusCode};
use model::SageMakerResource;
use serde::Serialize;
use serde_json::{json, Value};
use std::marker::PhantomData;
use std::sync::Arc;

pub(crate) const NOT_FOUND: &str = "Unable to find resource";
pub(crate) const GET_FAILED: &str = "Unable to GET resource";
pub(crate) const UNMARSHAL_FAILED: &str = "Unable to unmarshal resource";
pub(crate) const MARSHAL_FAILED: &str = "Unable to marshal resource";
pub(crate) const MISSING_CLIENT: &str = "Missing Kubernetes client";

/// What the provider hands to every `Read`: the cluster handle shared by all data sources, or
/// nothing when the provider is offline.
#[derive(Clone, Default)]
pub struct ProviderData {
    pub reader: Option<Arc<dyn CrdReader>>,
}

impl ProviderData {
    pub fn new(reader: Arc<dyn CrdReader>) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    pub fn offline() -> Self {
        Self::default()
    }
}

/// The result of a `Read`. `state` is `None` whenever `diagnostics` has an error.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ReadResponse {
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub(crate) fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    pub(crate) fn error<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_error(summary, detail);
        Self::failed(diagnostics)
    }
}

/// A read-only Terraform construct. Both the cluster-reading data sources and the YAML-rendering
/// manifests are data sources in this sense.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> String;

    fn schema(&self) -> Schema;

    async fn read(&self, provider: &ProviderData, config: &Value) -> ReadResponse;
}

/// Reads one object of kind `K` from the cluster and exposes its metadata and spec.
pub struct CrdDataSource<K> {
    _kind: PhantomData<K>,
}

impl<K> CrdDataSource<K>
where
    K: SageMakerResource,
{
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<K> Default for CrdDataSource<K>
where
    K: SageMakerResource,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The `metadata.name` and `metadata.namespace` of a configuration that passed validation.
pub(crate) fn name_and_namespace(config: &Value) -> (&str, &str) {
    let metadata = &config["metadata"];
    (
        metadata["name"].as_str().unwrap_or_default(),
        metadata["namespace"].as_str().unwrap_or_default(),
    )
}

#[async_trait]
impl<K> DataSource for CrdDataSource<K>
where
    K: SageMakerResource,
{
    fn type_name(&self) -> String {
        data_source_type_name::<K>()
    }

    fn schema(&self) -> Schema {
        Schema {
            description: format!(
                "Reads a {} ({}) from the cluster.",
                K::kind(&()),
                K::api_version(&())
            ),
            attributes: btree(vec![
                (
                    "id",
                    Attribute::new(
                        "",
                        "The namespace and name of the object, as 'namespace/name'.",
                        AttributeType::String,
                        Mode::Computed,
                    ),
                ),
                (
                    "api_version",
                    Attribute::new(
                        "apiVersion",
                        "The versioned schema of this representation of an object.",
                        AttributeType::String,
                        Mode::Computed,
                    ),
                ),
                (
                    "kind",
                    Attribute::new(
                        "kind",
                        "The type of the object.",
                        AttributeType::String,
                        Mode::Computed,
                    ),
                ),
                ("metadata", metadata_attribute(Mode::Computed)),
                ("spec", spec_attribute::<K>(true)),
            ]),
        }
    }

    async fn read(&self, provider: &ProviderData, config: &Value) -> ReadResponse {
        let type_name = self.type_name();
        debug!("Read resource {}", type_name);
        let schema = self.schema();
        let diagnostics = schema.validate(config);
        if diagnostics.has_error() {
            return ReadResponse::failed(diagnostics);
        }

        let reader = match &provider.reader {
            Some(reader) => reader.clone(),
            None => {
                return ReadResponse::error(
                    MISSING_CLIENT,
                    format!(
                        "The provider is offline so {} cannot read from a cluster.",
                        type_name
                    ),
                )
            }
        };
        let (name, namespace) = name_and_namespace(config);
        let client = CrdClient::<K>::new(reader, namespace);
        let object = match client.get(name).await {
            Ok(object) => object,
            Err(e) if e.is_not_found() => {
                return ReadResponse::error(
                    NOT_FOUND,
                    format!(
                        "{} '{}' does not exist in namespace '{}': {}",
                        K::kind(&()),
                        name,
                        namespace,
                        e
                    ),
                )
            }
            Err(e) if e.is_deserialization() => {
                return ReadResponse::error(UNMARSHAL_FAILED, e.to_string())
            }
            Err(e) => return ReadResponse::error(GET_FAILED, e.to_string()),
        };

        let value = match serde_json::to_value(&object) {
            Ok(value) => value,
            Err(e) => return ReadResponse::error(MARSHAL_FAILED, e.to_string()),
        };
        let metadata = object.object_meta();
        let spec = schema
            .attributes
            .get("spec")
            .map(|spec| to_state(&spec.attribute_type, value.get("spec")))
            .unwrap_or_default();
        ReadResponse {
            state: Some(json!({
                "id": format!("{}/{}", object.object_namespace(), object.object_name()),
                "api_version": K::api_version(&()),
                "kind": K::kind(&()),
                "metadata": {
                    "name": object.object_name(),
                    "namespace": object.object_namespace(),
                    "labels": metadata.labels,
                    "annotations": metadata.annotations,
                },
                "spec": spec,
            })),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use kube::api::{ApiResource, DynamicObject};
    use kube::core::ErrorResponse;
    use model::sagemaker::{Endpoint, Model, UserProfile};

    /// Serves canned objects by name and answers 404 for everything else.
    struct MockReader {
        objects: Vec<Value>,
        error: Option<(u16, &'static str)>,
    }

    #[async_trait]
    impl CrdReader for MockReader {
        async fn get_namespaced(
            &self,
            resource: &ApiResource,
            namespace: &str,
            name: &str,
        ) -> Result<DynamicObject, kube::Error> {
            if let Some((code, reason)) = self.error {
                return Err(kube::Error::Api(ErrorResponse {
                    status: "Failure".to_string(),
                    message: "injected".to_string(),
                    reason: reason.to_string(),
                    code,
                }));
            }
            self.objects
                .iter()
                .find(|object| {
                    object["metadata"]["name"] == name
                        && object["metadata"]["namespace"] == namespace
                        && object["kind"] == resource.kind.as_str()
                })
                .map(|object| serde_json::from_value(object.clone()).unwrap())
                .ok_or_else(|| {
                    kube::Error::Api(ErrorResponse {
                        status: "Failure".to_string(),
                        message: format!("{} \"{}\" not found", resource.plural, name),
                        reason: "NotFound".to_string(),
                        code: 404,
                    })
                })
        }
    }

    fn provider(objects: Vec<Value>) -> ProviderData {
        ProviderData::new(Arc::new(MockReader {
            objects,
            error: None,
        }))
    }

    fn config(name: &str) -> Value {
        json!({ "metadata": { "name": name, "namespace": "ml" } })
    }

    fn endpoint() -> Value {
        json!({
            "apiVersion": "sagemaker.services.k8s.aws/v1alpha1",
            "kind": "Endpoint",
            "metadata": {
                "name": "churn",
                "namespace": "ml",
                "labels": { "team": "ml-platform" },
                "resourceVersion": "42"
            },
            "spec": {
                "endpointName": "churn",
                "endpointConfigName": "churn-v2",
                "deploymentConfig": {
                    "blueGreenUpdatePolicy": {
                        "maximumExecutionTimeoutInSeconds": 600
                    }
                }
            },
            "status": { "endpointStatus": "InService" }
        })
    }

    #[tokio::test]
    async fn read_copies_metadata_and_spec() {
        let response = CrdDataSource::<Endpoint>::new()
            .read(&provider(vec![endpoint()]), &config("churn"))
            .await;
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
        let state = response.state.unwrap();
        assert_eq!(state["id"], "ml/churn");
        assert_eq!(state["api_version"], "sagemaker.services.k8s.aws/v1alpha1");
        assert_eq!(state["kind"], "Endpoint");
        assert_eq!(state["metadata"]["labels"], json!({ "team": "ml-platform" }));
        assert_eq!(state["metadata"]["annotations"], Value::Null);
        assert_eq!(state["spec"]["endpoint_config_name"], "churn-v2");
        assert_eq!(
            state["spec"]["deployment_config"]["blue_green_update_policy"]
                ["maximum_execution_timeout_in_seconds"],
            600
        );
        assert_eq!(
            state["spec"]["deployment_config"]["auto_rollback_configuration"],
            Value::Null
        );
        assert!(state.get("status").is_none());
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let response = CrdDataSource::<Endpoint>::new()
            .read(&provider(vec![endpoint()]), &config("other"))
            .await;
        assert!(response.state.is_none());
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, NOT_FOUND);
        assert!(diagnostic.detail.contains("'other'"));
    }

    #[tokio::test]
    async fn api_errors_are_get_failures() {
        let provider = ProviderData::new(Arc::new(MockReader {
            objects: vec![],
            error: Some((403, "Forbidden")),
        }));
        let response = CrdDataSource::<UserProfile>::new()
            .read(&provider, &config("alice"))
            .await;
        assert!(response.state.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            GET_FAILED
        );
    }

    #[tokio::test]
    async fn malformed_object_is_an_unmarshal_failure() {
        let broken = json!({
            "apiVersion": "sagemaker.services.k8s.aws/v1alpha1",
            "kind": "Model",
            "metadata": { "name": "broken", "namespace": "ml" },
            "spec": { "modelName": ["not", "a", "string"] }
        });
        let response = CrdDataSource::<Model>::new()
            .read(&provider(vec![broken]), &config("broken"))
            .await;
        assert!(response.state.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            UNMARSHAL_FAILED
        );
    }

    #[tokio::test]
    async fn offline_provider_has_no_client() {
        let response = CrdDataSource::<Model>::new()
            .read(&ProviderData::offline(), &config("xgboost"))
            .await;
        assert!(response.state.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            MISSING_CLIENT
        );
    }

    #[tokio::test]
    async fn invalid_config_never_reaches_the_cluster() {
        let provider = ProviderData::new(Arc::new(MockReader {
            objects: vec![],
            error: Some((500, "InternalError")),
        }));
        let response = CrdDataSource::<Model>::new()
            .read(
                &provider,
                &json!({
                    "metadata": { "name": "xgboost" },
                    "spec": { "model_name": "xgboost" }
                }),
            )
            .await;
        assert!(response.state.is_none());
        let summaries: Vec<_> = response
            .diagnostics
            .iter()
            .map(|diagnostic| diagnostic.summary.as_str())
            .collect();
        assert_eq!(
            summaries,
            vec![
                "Missing required argument",
                "Invalid Configuration for Read-Only Attribute"
            ]
        );
    }
}
