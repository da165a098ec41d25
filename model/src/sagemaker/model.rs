use super::shared::{Tag, VpcConfig};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ModelSpec defines the desired state of Model.
///
/// The properties of a model as returned by the Search API.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "Model",
    namespaced,
    plural = "models",
    singular = "model",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct ModelSpec {
    /// Specifies the containers in the inference pipeline.
    pub containers: Option<Vec<ContainerDefinition>>,
    /// Isolates the model container. No inbound or outbound network calls can be made to or from
    /// the model container.
    pub enable_network_isolation: Option<bool>,
    /// The Amazon Resource Name (ARN) of the IAM role that SageMaker can assume to access model
    /// artifacts and docker image for deployment on ML compute instances or for batch transform
    /// jobs.
    #[serde(rename = "executionRoleARN")]
    pub execution_role_arn: Option<String>,
    /// Specifies details of how containers in a multi-container endpoint are called.
    pub inference_execution_config: Option<InferenceExecutionConfig>,
    /// The name of the new model.
    pub model_name: String,
    /// The location of the primary docker image containing inference code, associated artifacts,
    /// and custom environment map that the inference code uses when the model is deployed for
    /// predictions.
    pub primary_container: Option<ContainerDefinition>,
    /// An array of key-value pairs.
    pub tags: Option<Vec<Tag>>,
    /// A VpcConfig object that specifies the VPC that you want your model to connect to.
    pub vpc_config: Option<VpcConfig>,
}

/// Describes the container, as part of model definition.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    /// This parameter is ignored for models that contain only a PrimaryContainer.
    pub container_hostname: Option<String>,
    /// The environment variables to set in the Docker container.
    pub environment: Option<BTreeMap<String, String>>,
    /// The path where inference code is stored.
    pub image: Option<String>,
    /// Specifies whether the model container is in Amazon ECR or a private Docker registry
    /// accessible from your Amazon Virtual Private Cloud (VPC).
    pub image_config: Option<ImageConfig>,
    /// The inference specification name in the model package version.
    pub inference_specification_name: Option<String>,
    /// Whether the container hosts a single model or multiple models.
    pub mode: Option<String>,
    /// The S3 path where the model artifacts, which result from model training, are stored.
    #[serde(rename = "modelDataURL")]
    pub model_data_url: Option<String>,
    /// The name or Amazon Resource Name (ARN) of the model package to use to create the model.
    pub model_package_name: Option<String>,
    /// Specifies additional configuration for multi-model endpoints.
    pub multi_model_config: Option<MultiModelConfig>,
}

/// Specifies whether the model container is in Amazon ECR or a private Docker registry accessible
/// from your Amazon Virtual Private Cloud (VPC).
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Set this to one of the following values: Platform or Vpc.
    pub repository_access_mode: Option<String>,
    /// Specifies an authentication configuration for the private docker registry where your model
    /// image is hosted.
    pub repository_auth_config: Option<RepositoryAuthConfig>,
}

/// Specifies an authentication configuration for the private docker registry where your model
/// image is hosted.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryAuthConfig {
    /// The Amazon Resource Name (ARN) of an Amazon Web Services Lambda function that provides
    /// credentials to authenticate to the private Docker registry where your model image is
    /// hosted.
    #[serde(rename = "repositoryCredentialsProviderARN")]
    pub repository_credentials_provider_arn: Option<String>,
}

/// Specifies additional configuration for hosting multi-model endpoints.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiModelConfig {
    /// Whether to cache models for a multi-model endpoint.
    pub model_cache_setting: Option<String>,
}

/// Specifies details about how containers in a multi-container endpoint are run.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceExecutionConfig {
    /// How containers in a multi-container are run. Serial or Direct.
    pub mode: Option<String>,
}
