use super::shared::{Tag, VpcConfig};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// DataQualityJobDefinitionSpec defines the desired state of DataQualityJobDefinition.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "DataQualityJobDefinition",
    namespaced,
    plural = "dataqualityjobdefinitions",
    singular = "dataqualityjobdefinition",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityJobDefinitionSpec {
    /// Specifies the container that runs the monitoring job.
    pub data_quality_app_specification: DataQualityAppSpecification,
    /// Configures the constraints and baselines for the monitoring job.
    pub data_quality_baseline_config: Option<DataQualityBaselineConfig>,
    /// A list of inputs for the monitoring job. Currently endpoints are supported as monitoring
    /// inputs.
    pub data_quality_job_input: DataQualityJobInput,
    /// The output configuration for monitoring jobs.
    pub data_quality_job_output_config: MonitoringOutputConfig,
    /// The name for the monitoring job definition.
    pub job_definition_name: String,
    /// Identifies the resources to deploy for a monitoring job.
    pub job_resources: MonitoringResources,
    /// Specifies networking configuration for the monitoring job.
    pub network_config: Option<MonitoringNetworkConfig>,
    /// The Amazon Resource Name (ARN) of an IAM role that Amazon SageMaker can assume to perform
    /// tasks on your behalf.
    #[serde(rename = "roleARN")]
    pub role_arn: String,
    /// A time limit for how long the monitoring job is allowed to run before stopping.
    pub stopping_condition: Option<MonitoringStoppingCondition>,
    /// An array of key-value pairs.
    pub tags: Option<Vec<Tag>>,
}

/// Information about the container that a data quality monitoring job runs.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityAppSpecification {
    /// The arguments to send to the container that the monitoring job runs.
    pub container_arguments: Option<Vec<String>>,
    /// The entrypoint for a container used to run a monitoring job.
    pub container_entrypoint: Option<Vec<String>>,
    /// Sets the environment variables in the container that the monitoring job runs.
    pub environment: Option<BTreeMap<String, String>>,
    /// The container image that the data quality monitoring job runs.
    #[serde(rename = "imageURI")]
    pub image_uri: Option<String>,
    /// An Amazon S3 URI to a script that is called after analysis has been performed.
    #[serde(rename = "postAnalyticsProcessorSourceURI")]
    pub post_analytics_processor_source_uri: Option<String>,
    /// An Amazon S3 URI to a script that is called per row prior to running analysis.
    #[serde(rename = "recordPreprocessorSourceURI")]
    pub record_preprocessor_source_uri: Option<String>,
}

/// Configuration for monitoring constraints and monitoring statistics. These baseline resources
/// are compared against the results of the current job from the series of jobs scheduled to
/// collect data periodically.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityBaselineConfig {
    /// The name of the job that performs baselining for the data quality monitoring job.
    pub baselining_job_name: Option<String>,
    /// The constraints resource for a monitoring job.
    pub constraints_resource: Option<MonitoringConstraintsResource>,
    /// The statistics resource for a monitoring job.
    pub statistics_resource: Option<MonitoringStatisticsResource>,
}

/// The constraints resource for a monitoring job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringConstraintsResource {
    /// The Amazon S3 URI for the constraints resource.
    #[serde(rename = "s3URI")]
    pub s3_uri: Option<String>,
}

/// The statistics resource for a monitoring job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStatisticsResource {
    /// The Amazon S3 URI for the statistics resource.
    #[serde(rename = "s3URI")]
    pub s3_uri: Option<String>,
}

/// The input for the data quality monitoring job.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityJobInput {
    /// Input object for the endpoint.
    pub endpoint_input: Option<EndpointInput>,
}

/// Input object for the endpoint.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointInput {
    /// If specified, monitoring jobs substract this time from the end time.
    pub end_time_offset: Option<String>,
    /// An endpoint in customer's account which has enabled DataCaptureConfig enabled.
    pub endpoint_name: Option<String>,
    /// The attributes of the input data that are the input features.
    pub features_attribute: Option<String>,
    /// The attribute of the input data that represents the ground truth label.
    pub inference_attribute: Option<String>,
    /// Path to the filesystem where the endpoint data is available to the container.
    pub local_path: Option<String>,
    /// In a classification problem, the attribute that represents the class probability.
    pub probability_attribute: Option<String>,
    /// The threshold for the class probability to be evaluated as a positive result.
    pub probability_threshold_attribute: Option<f64>,
    /// Whether input data distributed in Amazon S3 is fully replicated or sharded by an Amazon S3
    /// key. Defaults to FullyReplicated.
    pub s3_data_distribution_type: Option<String>,
    /// Whether the Pipe or File is used as the input mode for transferring data for the
    /// monitoring job. Pipe mode is recommended for large datasets. File mode is useful for small
    /// files that fit in memory. Defaults to File.
    pub s3_input_mode: Option<String>,
    /// If specified, monitoring jobs substract this time from the start time.
    pub start_time_offset: Option<String>,
}

/// The output configuration for monitoring jobs.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringOutputConfig {
    /// The Key Management Service (KMS) key that Amazon SageMaker uses to encrypt the model
    /// artifacts at rest using Amazon S3 server-side encryption.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// Monitoring outputs for monitoring jobs. This is where the output of the periodic
    /// monitoring jobs is uploaded.
    pub monitoring_outputs: Option<Vec<MonitoringOutput>>,
}

/// The output object for a monitoring job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringOutput {
    /// The Amazon S3 storage location where the results of a monitoring job are saved.
    pub s3_output: Option<MonitoringS3Output>,
}

/// Information about where and how you want to store the results of a monitoring job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringS3Output {
    /// The local path to the Amazon S3 storage location where Amazon SageMaker saves the results
    /// of a monitoring job.
    pub local_path: Option<String>,
    /// Whether to upload the results of the monitoring job continuously or after the job
    /// completes.
    pub s3_upload_mode: Option<String>,
    /// A URI that identifies the Amazon S3 storage location where Amazon SageMaker saves the
    /// results of a monitoring job.
    #[serde(rename = "s3URI")]
    pub s3_uri: Option<String>,
}

/// Identifies the resources to deploy for a monitoring job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringResources {
    /// The configuration for the cluster resources used to run the processing job.
    pub cluster_config: Option<MonitoringClusterConfig>,
}

/// Configuration for the cluster used to run model monitoring jobs.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringClusterConfig {
    /// The number of ML compute instances to use in the model monitoring job.
    pub instance_count: Option<i64>,
    /// The ML compute instance type for the processing job.
    pub instance_type: Option<String>,
    /// The Key Management Service (KMS) key that Amazon SageMaker uses to encrypt data on the
    /// storage volume attached to the ML compute instance(s) that run the model monitoring job.
    #[serde(rename = "volumeKMSKeyID")]
    pub volume_kms_key_id: Option<String>,
    /// The size of the ML storage volume, in gigabytes, that you want to provision.
    #[serde(rename = "volumeSizeInGB")]
    pub volume_size_in_gb: Option<i64>,
}

/// The networking configuration for the monitoring job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringNetworkConfig {
    /// Whether to encrypt all communications between the instances used for the monitoring jobs.
    pub enable_inter_container_traffic_encryption: Option<bool>,
    /// Whether to allow inbound and outbound network calls to and from the containers used for the
    /// monitoring job.
    pub enable_network_isolation: Option<bool>,
    /// Specifies a VPC that your training jobs and hosted models have access to.
    pub vpc_config: Option<VpcConfig>,
}

/// A time limit for how long the monitoring job is allowed to run before stopping.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStoppingCondition {
    /// The maximum runtime allowed in seconds.
    pub max_runtime_in_seconds: Option<i64>,
}
