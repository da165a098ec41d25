//! Shapes that appear in more than one SageMaker resource.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tag object that consists of a key and an optional value, used to manage metadata for
/// SageMaker Amazon Web Services resources.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The tag key. Tag keys must be unique per resource.
    pub key: Option<String>,
    /// The tag value.
    pub value: Option<String>,
}

/// Specifies a VPC that your training jobs and hosted models have access to. Control access to
/// and from your training and model containers by configuring the VPC.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfig {
    /// The VPC security group IDs, in the form sg-xxxxxxxx.
    #[serde(rename = "securityGroupIDs")]
    pub security_group_ids: Option<Vec<String>>,
    /// The ID of the subnets in the VPC to which you want to connect your training job or model.
    pub subnets: Option<Vec<String>>,
}

/// Specifies the ARN's of a SageMaker image and SageMaker image version, and the instance type
/// that the version runs on.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    /// The instance type that the image version runs on.
    pub instance_type: Option<String>,
    /// The Amazon Resource Name (ARN) of the Lifecycle Configuration attached to the Resource.
    #[serde(rename = "lifecycleConfigARN")]
    pub lifecycle_config_arn: Option<String>,
    /// The ARN of the SageMaker image that the image version belongs to.
    #[serde(rename = "sageMakerImageARN")]
    pub sage_maker_image_arn: Option<String>,
    /// The ARN of the image version created on the instance.
    #[serde(rename = "sageMakerImageVersionARN")]
    pub sage_maker_image_version_arn: Option<String>,
}

/// A custom SageMaker image.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomImage {
    /// The name of the AppImageConfig.
    pub app_image_config_name: Option<String>,
    /// The name of the CustomImage. Must be unique to your account.
    pub image_name: Option<String>,
    /// The version number of the CustomImage.
    pub image_version_number: Option<i64>,
}

/// The JupyterServer app settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JupyterServerAppSettings {
    /// The default instance type and the Amazon Resource Name (ARN) of the default SageMaker image
    /// used by the JupyterServer app.
    pub default_resource_spec: Option<ResourceSpec>,
    /// The Amazon Resource Name (ARN) of the Lifecycle Configurations attached to the
    /// JupyterServerApp.
    #[serde(rename = "lifecycleConfigARNs")]
    pub lifecycle_config_arns: Option<Vec<String>>,
}

/// The KernelGateway app settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelGatewayAppSettings {
    /// A list of custom SageMaker images that are configured to run as a KernelGateway app.
    pub custom_images: Option<Vec<CustomImage>>,
    /// The default instance type and the Amazon Resource Name (ARN) of the default SageMaker image
    /// used by the KernelGateway app.
    pub default_resource_spec: Option<ResourceSpec>,
    /// The Amazon Resource Name (ARN) of the Lifecycle Configurations attached to the user
    /// profile or domain.
    #[serde(rename = "lifecycleConfigARNs")]
    pub lifecycle_config_arns: Option<Vec<String>>,
}

/// A collection of settings that configure user interaction with the RStudioServerPro app.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RStudioServerProAppSettings {
    /// Indicates whether the current user has access to the RStudioServerPro app.
    pub access_status: Option<String>,
    /// The level of permissions that the user has within the RStudioServerPro app.
    pub user_group: Option<String>,
}

/// Specifies options for sharing SageMaker Studio notebooks.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingSettings {
    /// Whether to include the notebook cell output when sharing the notebook. The default is
    /// Disabled.
    pub notebook_output_option: Option<String>,
    /// When NotebookOutputOption is Allowed, the Amazon Web Services Key Management Service (KMS)
    /// encryption key ID used to encrypt the notebook cell output in the Amazon S3 bucket.
    #[serde(rename = "s3KMSKeyID")]
    pub s3_kms_key_id: Option<String>,
    /// When NotebookOutputOption is Allowed, the Amazon S3 bucket used to store the shared
    /// notebook snapshots.
    pub s3_output_path: Option<String>,
}

/// The TensorBoard app settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TensorBoardAppSettings {
    /// The default instance type and the Amazon Resource Name (ARN) of the SageMaker image created
    /// on the instance.
    pub default_resource_spec: Option<ResourceSpec>,
}

/// A collection of settings that apply to users of Amazon SageMaker Studio.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// The execution role for the user.
    pub execution_role: Option<String>,
    /// The Jupyter server's app settings.
    pub jupyter_server_app_settings: Option<JupyterServerAppSettings>,
    /// The kernel gateway app settings.
    pub kernel_gateway_app_settings: Option<KernelGatewayAppSettings>,
    /// A collection of settings that configure user interaction with the RStudioServerPro app.
    pub r_studio_server_pro_app_settings: Option<RStudioServerProAppSettings>,
    /// The security groups for the Amazon Virtual Private Cloud (VPC) that Studio uses for
    /// communication.
    pub security_groups: Option<Vec<String>>,
    /// Specifies options for sharing SageMaker Studio notebooks.
    pub sharing_settings: Option<SharingSettings>,
    /// The TensorBoard app settings.
    pub tensor_board_app_settings: Option<TensorBoardAppSettings>,
}
