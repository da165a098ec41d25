use crate::data_source::{
    name_and_namespace, DataSource, ProviderData, ReadResponse, MARSHAL_FAILED, UNMARSHAL_FAILED,
};
use crate::naming::manifest_type_name;
use crate::schema::{btree, metadata_attribute, spec_attribute, to_json, Attribute};
use crate::schema::{AttributeType, Mode, Schema};
use async_trait::async_trait;
use log::debug;
use model::SageMakerResource;
use serde_json::{json, Value};
use std::marker::PhantomData;

/// Renders the configuration of a `K` as a YAML manifest without talking to a cluster.
pub struct CrdManifest<K> {
    _kind: PhantomData<K>,
}

impl<K> CrdManifest<K>
where
    K: SageMakerResource,
{
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }

    /// Builds the typed object from configuration that passed validation.
    fn object(&self, schema: &Schema, config: &Value) -> Result<K, serde_json::Error> {
        let (name, namespace) = name_and_namespace(config);
        let metadata = &config["metadata"];
        let spec = match (schema.attributes.get("spec"), config.get("spec")) {
            (Some(spec), Some(value)) if !value.is_null() => to_json(&spec.attribute_type, value),
            _ => json!({}),
        };
        let mut object = json!({
            "apiVersion": K::api_version(&()),
            "kind": K::kind(&()),
            "metadata": {
                "name": name,
                "namespace": namespace,
            },
            "spec": spec,
        });
        for field in ["labels", "annotations"] {
            if let Some(value) = metadata.get(field).filter(|value| !value.is_null()) {
                object["metadata"][field] = value.clone();
            }
        }
        serde_json::from_value(object)
    }
}

impl<K> Default for CrdManifest<K>
where
    K: SageMakerResource,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K> DataSource for CrdManifest<K>
where
    K: SageMakerResource,
{
    fn type_name(&self) -> String {
        manifest_type_name::<K>()
    }

    fn schema(&self) -> Schema {
        Schema {
            description: format!(
                "Renders a {} ({}) as a Kubernetes manifest.",
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
                    "yaml",
                    Attribute::new(
                        "",
                        "The generated manifest in YAML format.",
                        AttributeType::String,
                        Mode::Computed,
                    ),
                ),
                ("metadata", metadata_attribute(Mode::Optional)),
                ("spec", spec_attribute::<K>(false)),
            ]),
        }
    }

    async fn read(&self, _provider: &ProviderData, config: &Value) -> ReadResponse {
        debug!("Read resource {}", self.type_name());
        let schema = self.schema();
        let diagnostics = schema.validate(config);
        if diagnostics.has_error() {
            return ReadResponse::failed(diagnostics);
        }

        let object = match self.object(&schema, config) {
            Ok(object) => object,
            Err(e) => return ReadResponse::error(UNMARSHAL_FAILED, e.to_string()),
        };
        let yaml = match object.to_yaml() {
            Ok(yaml) => yaml,
            Err(e) => return ReadResponse::error(MARSHAL_FAILED, e.to_string()),
        };

        let mut state = config.clone();
        if let Some(state) = state.as_object_mut() {
            state.insert(
                "id".to_string(),
                json!(format!(
                    "{}/{}",
                    object.object_namespace(),
                    object.object_name()
                )),
            );
            state.insert("yaml".to_string(), json!(yaml));
        }
        ReadResponse {
            state: Some(state),
            diagnostics,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use model::sagemaker::{App, EndpointConfig, Model, ModelPackageGroup};
    use model::CrdExt;

    async fn read<K: SageMakerResource>(config: Value) -> ReadResponse {
        CrdManifest::<K>::new()
            .read(&ProviderData::offline(), &config)
            .await
    }

    #[tokio::test]
    async fn renders_yaml_from_snake_case_config() {
        let response = read::<Model>(json!({
            "metadata": {
                "name": "xgboost",
                "namespace": "ml",
                "labels": { "app.kubernetes.io/name": "xgboost" }
            },
            "spec": {
                "model_name": "xgboost",
                "execution_role_arn": null,
                "primary_container": {
                    "image": "xgboost",
                    "environment": { "SAGEMAKER_PROGRAM": "inference.py" }
                },
                "vpc_config": { "security_group_ids": ["sg-1"], "subnets": ["subnet-1"] }
            }
        }))
        .await;
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
        let state = response.state.unwrap();
        assert_eq!(state["id"], "ml/xgboost");
        assert_eq!(state["spec"]["model_name"], "xgboost");

        let yaml = state["yaml"].as_str().unwrap();
        let model = Model::from_yaml(yaml).unwrap();
        assert_eq!(model.object_name(), "xgboost");
        assert_eq!(model.spec.model_name, "xgboost");
        assert_eq!(
            model.spec.primary_container.unwrap().environment.unwrap()["SAGEMAKER_PROGRAM"],
            "inference.py"
        );
        assert!(yaml.contains("apiVersion: sagemaker.services.k8s.aws/v1alpha1"));
        assert!(yaml.contains("kind: Model"));
        assert!(yaml.contains("securityGroupIDs:"));
        assert!(yaml.contains("SAGEMAKER_PROGRAM: inference.py"));
        assert!(!yaml.contains("executionRoleARN"));
        assert!(!yaml.contains("null"));
    }

    #[test]
    fn schema_modes() {
        let schema = CrdManifest::<ModelPackageGroup>::new().schema();
        assert_eq!(schema.attributes["spec"].mode, Mode::Required);
        let schema = CrdManifest::<EndpointConfig>::new().schema();
        assert_eq!(schema.attributes["spec"].mode, Mode::Required);
        assert_eq!(schema.attributes["metadata"].mode, Mode::Required);
        assert_eq!(schema.attributes["yaml"].mode, Mode::Computed);
    }

    #[tokio::test]
    async fn missing_required_spec_fields_are_reported() {
        let response = read::<App>(json!({
            "metadata": { "name": "studio", "namespace": "ml" },
            "spec": { "app_name": "default", "app_type": "JupyterServer" }
        }))
        .await;
        assert!(response.state.is_none());
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Missing required argument");
        assert_eq!(diagnostic.attribute.as_deref(), Some("spec.domain_id"));
    }

    #[tokio::test]
    async fn integers_out_of_range_fail_to_unmarshal() {
        let response = read::<EndpointConfig>(json!({
            "metadata": { "name": "churn", "namespace": "ml" },
            "spec": {
                "endpoint_config_name": "churn",
                "production_variants": [{ "initial_instance_count": u64::MAX }]
            }
        }))
        .await;
        assert!(response.state.is_none());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            UNMARSHAL_FAILED
        );
    }
}
