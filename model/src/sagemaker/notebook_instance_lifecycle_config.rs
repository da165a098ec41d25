use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// NotebookInstanceLifecycleConfigSpec defines the desired state of
/// NotebookInstanceLifecycleConfig.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "NotebookInstanceLifecycleConfig",
    namespaced,
    plural = "notebookinstancelifecycleconfigs",
    singular = "notebookinstancelifecycleconfig",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct NotebookInstanceLifecycleConfigSpec {
    /// The name of the lifecycle configuration.
    pub notebook_instance_lifecycle_config_name: String,
    /// A shell script that runs only once, when you create a notebook instance. The shell script
    /// must be a base64-encoded string.
    pub on_create: Option<Vec<NotebookInstanceLifecycleHook>>,
    /// A shell script that runs every time you start a notebook instance, including when you
    /// create the notebook instance. The shell script must be a base64-encoded string.
    pub on_start: Option<Vec<NotebookInstanceLifecycleHook>>,
}

/// Contains the notebook instance lifecycle configuration script.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookInstanceLifecycleHook {
    /// A base64-encoded string that contains a shell script for a notebook instance lifecycle
    /// configuration.
    pub content: Option<String>,
}
