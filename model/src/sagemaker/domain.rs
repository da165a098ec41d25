use super::shared::{ResourceSpec, Tag, UserSettings};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// DomainSpec defines the desired state of Domain.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "Domain",
    namespaced,
    plural = "domains",
    singular = "domain",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct DomainSpec {
    /// Specifies the VPC used for non-EFS traffic. PublicInternetOnly or VpcOnly.
    pub app_network_access_type: Option<String>,
    /// The entity that creates and manages the required security groups for inter-app
    /// communication in VPCOnly mode.
    pub app_security_group_management: Option<String>,
    /// The mode of authentication that members use to access the domain. SSO or IAM.
    pub auth_mode: String,
    /// The default settings to use to create a user profile when UserSettings isn't specified in
    /// the call to the CreateUserProfile API.
    pub default_user_settings: UserSettings,
    /// A name for the domain.
    pub domain_name: String,
    /// A collection of Domain settings.
    pub domain_settings: Option<DomainSettings>,
    /// Use KmsKeyId.
    #[serde(rename = "homeEFSFileSystemKMSKeyID")]
    pub home_efs_file_system_kms_key_id: Option<String>,
    /// SageMaker uses Amazon Web Services KMS to encrypt the EFS volume attached to the domain
    /// with an Amazon Web Services managed key by default.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// The VPC subnets that Studio uses for communication.
    #[serde(rename = "subnetIDs")]
    pub subnet_ids: Vec<String>,
    /// Tags to associated with the Domain. Each tag consists of a key and an optional value. Tag
    /// keys must be unique per resource.
    pub tags: Option<Vec<Tag>>,
    /// The ID of the Amazon Virtual Private Cloud (VPC) that Studio uses for communication.
    #[serde(rename = "vpcID")]
    pub vpc_id: String,
}

/// A collection of settings that apply to the SageMaker Domain.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSettings {
    /// A collection of settings that configure the RStudioServerPro Domain-level app.
    pub r_studio_server_pro_domain_settings: Option<RStudioServerProDomainSettings>,
    /// The security groups for the Amazon Virtual Private Cloud that the Domain uses for
    /// communication between Domain-level apps and user apps.
    #[serde(rename = "securityGroupIDs")]
    pub security_group_ids: Option<Vec<String>>,
}

/// A collection of settings that configure the RStudioServerPro Domain-level app.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RStudioServerProDomainSettings {
    /// Specifies the ARN's of a SageMaker image and SageMaker image version, and the instance type
    /// that the version runs on.
    pub default_resource_spec: Option<ResourceSpec>,
    /// The ARN of the execution role for the RStudioServerPro Domain-level app.
    #[serde(rename = "domainExecutionRoleARN")]
    pub domain_execution_role_arn: Option<String>,
    /// A URL pointing to an RStudio Connect server.
    #[serde(rename = "rStudioConnectURL")]
    pub r_studio_connect_url: Option<String>,
    /// A URL pointing to an RStudio Package Manager server.
    #[serde(rename = "rStudioPackageManagerURL")]
    pub r_studio_package_manager_url: Option<String>,
}
