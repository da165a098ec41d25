use super::shared::{ResourceSpec, Tag};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// AppSpec defines the desired state of App.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "App",
    namespaced,
    plural = "apps",
    singular = "app",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct AppSpec {
    /// The name of the app.
    pub app_name: String,
    /// The type of app. JupyterServer, KernelGateway, TensorBoard, RStudioServerPro or
    /// RSessionGateway.
    pub app_type: String,
    /// The domain ID.
    #[serde(rename = "domainID")]
    pub domain_id: String,
    /// The instance type and the Amazon Resource Name (ARN) of the SageMaker image created on the
    /// instance.
    pub resource_spec: Option<ResourceSpec>,
    /// Each tag consists of a key and an optional value. Tag keys must be unique per resource.
    pub tags: Option<Vec<Tag>>,
    /// The user profile name. If this value is not set, then SpaceName must be set.
    pub user_profile_name: Option<String>,
}
