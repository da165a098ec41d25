use super::shared::Tag;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ModelPackageGroupSpec defines the desired state of ModelPackageGroup.
///
/// A group of versioned models in the model registry.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "ModelPackageGroup",
    namespaced,
    plural = "modelpackagegroups",
    singular = "modelpackagegroup",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct ModelPackageGroupSpec {
    /// A description for the model group.
    pub model_package_group_description: Option<String>,
    /// The name of the model group.
    pub model_package_group_name: String,
    /// A list of key value pairs associated with the model group.
    pub tags: Option<Vec<Tag>>,
}
