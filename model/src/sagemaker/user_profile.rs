use super::shared::{Tag, UserSettings};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// UserProfileSpec defines the desired state of UserProfile.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "UserProfile",
    namespaced,
    plural = "userprofiles",
    singular = "userprofile",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileSpec {
    /// The ID of the associated Domain.
    #[serde(rename = "domainID")]
    pub domain_id: String,
    /// A specifier for the type of value specified in SingleSignOnUserValue. Currently, the only
    /// supported value is "UserName".
    pub single_sign_on_user_identifier: Option<String>,
    /// The username of the associated Amazon Web Services Single Sign-On User for this
    /// UserProfile.
    pub single_sign_on_user_value: Option<String>,
    /// Each tag consists of a key and an optional value. Tag keys must be unique per resource.
    pub tags: Option<Vec<Tag>>,
    /// A name for the UserProfile. This value is not case sensitive.
    pub user_profile_name: String,
    /// A collection of settings.
    pub user_settings: Option<UserSettings>,
}
