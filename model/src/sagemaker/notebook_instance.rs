use super::shared::Tag;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// NotebookInstanceSpec defines the desired state of NotebookInstance.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "NotebookInstance",
    namespaced,
    plural = "notebookinstances",
    singular = "notebookinstance",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct NotebookInstanceSpec {
    /// A list of Elastic Inference (EI) instance types to associate with this notebook instance.
    pub accelerator_types: Option<Vec<String>>,
    /// An array of up to three Git repositories to associate with the notebook instance.
    pub additional_code_repositories: Option<Vec<String>>,
    /// A Git repository to associate with the notebook instance as its default code repository.
    pub default_code_repository: Option<String>,
    /// Sets whether SageMaker provides internet access to the notebook instance. Enabled or
    /// Disabled.
    pub direct_internet_access: Option<String>,
    /// Information on the IMDS configuration of the notebook instance.
    pub instance_metadata_service_configuration: Option<InstanceMetadataServiceConfiguration>,
    /// The type of ML compute instance to launch for the notebook instance.
    pub instance_type: String,
    /// The Amazon Resource Name (ARN) of a Amazon Web Services Key Management Service key that
    /// SageMaker uses to encrypt data on the storage volume attached to your notebook instance.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// The name of a lifecycle configuration to associate with the notebook instance.
    pub lifecycle_config_name: Option<String>,
    /// The name of the new notebook instance.
    pub notebook_instance_name: String,
    /// The platform identifier of the notebook instance runtime environment.
    pub platform_identifier: Option<String>,
    /// When you send any requests to Amazon Web Services resources from the notebook instance,
    /// SageMaker assumes this role to perform tasks on your behalf.
    #[serde(rename = "roleARN")]
    pub role_arn: String,
    /// Whether root access is enabled or disabled for users of the notebook instance.
    pub root_access: Option<String>,
    /// The VPC security group IDs, in the form sg-xxxxxxxx.
    #[serde(rename = "securityGroupIDs")]
    pub security_group_ids: Option<Vec<String>>,
    /// The ID of the subnet in a VPC to which you would like to have a connectivity from your ML
    /// compute instance.
    #[serde(rename = "subnetID")]
    pub subnet_id: Option<String>,
    /// An array of key-value pairs.
    pub tags: Option<Vec<Tag>>,
    /// The size, in GB, of the ML storage volume to attach to the notebook instance.
    #[serde(rename = "volumeSizeInGB")]
    pub volume_size_in_gb: Option<i64>,
}

/// Information on the IMDS configuration of the notebook instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMetadataServiceConfiguration {
    /// Indicates the minimum IMDS version that the notebook instance supports.
    pub minimum_instance_metadata_service_version: Option<String>,
}
