use super::shared::Tag;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// FeatureGroupSpec defines the desired state of FeatureGroup.
///
/// Amazon SageMaker Feature Store stores features in a collection called Feature Group. A Feature
/// Group can be visualized as a table which has rows, with a unique identifier for each row where
/// each column in the table is a feature.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "FeatureGroup",
    namespaced,
    plural = "featuregroups",
    singular = "featuregroup",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGroupSpec {
    /// A free-form description of a FeatureGroup.
    pub description: Option<String>,
    /// The name of the feature that stores the EventTime of a Record in a FeatureGroup.
    pub event_time_feature_name: String,
    /// A list of Feature names and types. Name and Type is compulsory per Feature.
    pub feature_definitions: Vec<FeatureDefinition>,
    /// The name of the FeatureGroup. The name must be unique within an Amazon Web Services Region
    /// in an Amazon Web Services account.
    pub feature_group_name: String,
    /// Use this to configure an OfflineFeatureStore. This parameter allows you to specify the
    /// Amazon Simple Storage Service (Amazon S3) location of an OfflineStore, the Glue Data
    /// Catalog configuration and the table format.
    pub offline_store_config: Option<OfflineStoreConfig>,
    /// You can turn the OnlineStore on or off by specifying True for the EnableOnlineStore flag in
    /// OnlineStoreConfig.
    pub online_store_config: Option<OnlineStoreConfig>,
    /// The name of the Feature whose value uniquely identifies a Record defined in the
    /// FeatureStore.
    pub record_identifier_feature_name: String,
    /// The Amazon Resource Name (ARN) of the IAM execution role used to persist data into the
    /// OfflineStore if an OfflineStoreConfig is provided.
    #[serde(rename = "roleARN")]
    pub role_arn: Option<String>,
    /// Tags used to identify Features in each FeatureGroup.
    pub tags: Option<Vec<Tag>>,
}

/// A list of features. You must include FeatureName and FeatureType.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDefinition {
    /// The name of a feature.
    pub feature_name: Option<String>,
    /// The value type of a feature. Valid values are Integral, Fractional, or String.
    pub feature_type: Option<String>,
}

/// The configuration of an OfflineStore.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineStoreConfig {
    /// The meta data of the Glue table for the OfflineStore.
    pub data_catalog_config: Option<DataCatalogConfig>,
    /// Set to True to disable the automatic creation of an Amazon Web Services Glue table when
    /// configuring an OfflineStore.
    pub disable_glue_table_creation: Option<bool>,
    /// The Amazon Simple Storage (Amazon S3) location of OfflineStore.
    pub s3_storage_config: Option<S3StorageConfig>,
    /// Format for the offline store table. Supported formats are Glue (Default) and Apache
    /// Iceberg.
    pub table_format: Option<String>,
}

/// The meta data of the Glue table which serves as data catalog for the OfflineStore.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCatalogConfig {
    /// The name of the Glue table catalog.
    pub catalog: Option<String>,
    /// The name of the Glue table database.
    pub database: Option<String>,
    /// The name of the Glue table.
    pub table_name: Option<String>,
}

/// The Amazon Simple Storage (Amazon S3) location and security configuration for OfflineStore.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3StorageConfig {
    /// The Amazon Web Services Key Management Service (KMS) key ARN of the key used to encrypt
    /// any objects written into the OfflineStore S3 location.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// The S3 path where offline records are written.
    #[serde(rename = "resolvedOutputS3URI")]
    pub resolved_output_s3_uri: Option<String>,
    /// The S3 URI, or location in Amazon S3, of OfflineStore.
    #[serde(rename = "s3URI")]
    pub s3_uri: Option<String>,
}

/// Use this to specify the Amazon Web Services Key Management Service (KMS) Key ID, or KMSKeyId,
/// for at rest data encryption. The OnlineStore is off unless EnableOnlineStore is True.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineStoreConfig {
    /// Turn OnlineStore off by specifying False for the EnableOnlineStore flag. Turn OnlineStore on
    /// by specifying True for the EnableOnlineStore flag.
    pub enable_online_store: Option<bool>,
    /// Use to specify KMS Key ID (KMSKeyId) for at-rest encryption of your OnlineStore.
    pub security_config: Option<OnlineStoreSecurityConfig>,
}

/// The security configuration for OnlineStore.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineStoreSecurityConfig {
    /// The Amazon Web Services Key Management Service (KMS) key ARN that SageMaker Feature Store
    /// uses to encrypt the Amazon S3 objects at rest using Amazon S3 server-side encryption.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
}
