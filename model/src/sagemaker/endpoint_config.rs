use super::shared::Tag;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// EndpointConfigSpec defines the desired state of EndpointConfig.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "EndpointConfig",
    namespaced,
    plural = "endpointconfigs",
    singular = "endpointconfig",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfigSpec {
    /// Specifies configuration for how an endpoint performs asynchronous inference.
    pub async_inference_config: Option<AsyncInferenceConfig>,
    /// Configuration to control how SageMaker captures inference data.
    pub data_capture_config: Option<DataCaptureConfig>,
    /// The name of the endpoint configuration. You specify this name in a CreateEndpoint request.
    pub endpoint_config_name: String,
    /// The Amazon Resource Name (ARN) of a Amazon Web Services Key Management Service key that
    /// SageMaker uses to encrypt data on the storage volume attached to the ML compute instance
    /// that hosts the endpoint.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// An array of ProductionVariant objects, one for each model that you want to host at this
    /// endpoint.
    pub production_variants: Vec<ProductionVariant>,
    /// An array of key-value pairs.
    pub tags: Option<Vec<Tag>>,
}

/// Specifies configuration for how an endpoint performs asynchronous inference.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncInferenceConfig {
    /// Configures the behavior of the client used by SageMaker to interact with the model
    /// container during asynchronous inference.
    pub client_config: Option<AsyncInferenceClientConfig>,
    /// Specifies the configuration for asynchronous inference invocation outputs.
    pub output_config: Option<AsyncInferenceOutputConfig>,
}

/// Configures the behavior of the client used by SageMaker to interact with the model container
/// during asynchronous inference.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncInferenceClientConfig {
    /// The maximum number of concurrent requests sent by the SageMaker client to the model
    /// container.
    pub max_concurrent_invocations_per_instance: Option<i64>,
}

/// Specifies the configuration for asynchronous inference invocation outputs.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncInferenceOutputConfig {
    /// The Amazon Web Services Key Management Service (Amazon Web Services KMS) key that SageMaker
    /// uses to encrypt the asynchronous inference output in Amazon S3.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// Specifies the configuration for notifications of inference results for asynchronous
    /// inference.
    pub notification_config: Option<AsyncInferenceNotificationConfig>,
    /// The Amazon S3 location to upload inference responses to.
    pub s3_output_path: Option<String>,
}

/// Specifies the configuration for notifications of inference results for asynchronous inference.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncInferenceNotificationConfig {
    /// Amazon SNS topic to post a notification to when inference fails.
    pub error_topic: Option<String>,
    /// Amazon SNS topic to post a notification to when inference completes successfully.
    pub success_topic: Option<String>,
}

/// Configuration to control how SageMaker captures inference data.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCaptureConfig {
    /// Configuration specifying how to treat different headers.
    pub capture_content_type_header: Option<CaptureContentTypeHeader>,
    /// Specifies data Model Monitor will capture.
    pub capture_options: Option<Vec<CaptureOption>>,
    /// The Amazon S3 location used to capture the data.
    #[serde(rename = "destinationS3URI")]
    pub destination_s3_uri: Option<String>,
    /// Whether data capture should be enabled or disabled (defaults to enabled).
    pub enable_capture: Option<bool>,
    /// The percentage of requests SageMaker will capture.
    pub initial_sampling_percentage: Option<i64>,
    /// The Amazon Resource Name (ARN) of a Amazon Web Services Key Management Service key that
    /// SageMaker uses to encrypt the captured data at rest using Amazon S3 server-side encryption.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
}

/// Configuration specifying how to treat different headers. If no headers are specified SageMaker
/// will by default base64 encode when capturing the data.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureContentTypeHeader {
    /// The list of all content type headers that SageMaker will treat as CSV and capture
    /// accordingly.
    pub csv_content_types: Option<Vec<String>>,
    /// The list of all content type headers that SageMaker will treat as JSON and capture
    /// accordingly.
    pub json_content_types: Option<Vec<String>>,
}

/// Specifies data Model Monitor will capture.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOption {
    /// Specify the boundary of data to capture. Input or Output.
    pub capture_mode: Option<String>,
}

/// Identifies a model that you want to host and the resources chosen to deploy for hosting it.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionVariant {
    /// The size of the Elastic Inference (EI) instance to use for the production variant.
    pub accelerator_type: Option<String>,
    /// The timeout value, in seconds, for your inference container to pass health check by
    /// SageMaker Hosting.
    pub container_startup_health_check_timeout_in_seconds: Option<i64>,
    /// Specifies configuration for a core dump from the model container when the process crashes.
    pub core_dump_config: Option<ProductionVariantCoreDumpConfig>,
    /// Number of instances to launch initially.
    pub initial_instance_count: Option<i64>,
    /// Determines initial traffic distribution among all of the models that you specify in the
    /// endpoint configuration.
    pub initial_variant_weight: Option<f64>,
    /// The ML compute instance type.
    pub instance_type: Option<String>,
    /// The timeout value, in seconds, to download and extract the model that you want to host from
    /// Amazon S3 to the individual inference instance associated with this production variant.
    pub model_data_download_timeout_in_seconds: Option<i64>,
    /// The name of the model that you want to host.
    pub model_name: Option<String>,
    /// The serverless configuration for an endpoint.
    pub serverless_config: Option<ProductionVariantServerlessConfig>,
    /// The name of the production variant.
    pub variant_name: Option<String>,
    /// The size, in GB, of the ML storage volume attached to individual inference instance
    /// associated with the production variant.
    #[serde(rename = "volumeSizeInGB")]
    pub volume_size_in_gb: Option<i64>,
}

/// Specifies configuration for a core dump from the model container when the process crashes.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionVariantCoreDumpConfig {
    /// The Amazon S3 bucket to send the core dump to.
    #[serde(rename = "destinationS3URI")]
    pub destination_s3_uri: Option<String>,
    /// The Amazon Web Services Key Management Service (Amazon Web Services KMS) key that SageMaker
    /// uses to encrypt the core dump data at rest using Amazon S3 server-side encryption.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
}

/// Specifies the serverless configuration for an endpoint variant.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionVariantServerlessConfig {
    /// The maximum number of concurrent invocations your serverless endpoint can process.
    pub max_concurrency: Option<i64>,
    /// The memory size of your serverless endpoint.
    #[serde(rename = "memorySizeInMB")]
    pub memory_size_in_mb: Option<i64>,
}
