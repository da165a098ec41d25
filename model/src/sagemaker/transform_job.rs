use super::shared::Tag;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// TransformJobSpec defines the desired state of TransformJob.
///
/// A batch transform job.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "TransformJob",
    namespaced,
    plural = "transformjobs",
    singular = "transformjob",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct TransformJobSpec {
    /// Specifies the number of records to include in a mini-batch for an HTTP inference request.
    /// MultiRecord or SingleRecord.
    pub batch_strategy: Option<String>,
    /// The data structure used to specify the data to be used for inference in a batch transform
    /// job and to associate the data that is relevant to the prediction results in the output.
    pub data_processing: Option<DataProcessing>,
    /// The environment variables to set in the Docker container.
    pub environment: Option<BTreeMap<String, String>>,
    /// Associates a SageMaker job as a trial component with an experiment and trial.
    pub experiment_config: Option<ExperimentConfig>,
    /// The maximum number of parallel requests that can be sent to each instance in a transform
    /// job.
    pub max_concurrent_transforms: Option<i64>,
    /// The maximum allowed size of the payload, in MB.
    #[serde(rename = "maxPayloadInMB")]
    pub max_payload_in_mb: Option<i64>,
    /// Configures the timeout and maximum number of retries for processing a transform job
    /// invocation.
    pub model_client_config: Option<ModelClientConfig>,
    /// The name of the model that you want to use for the transform job.
    pub model_name: String,
    /// An array of key-value pairs.
    pub tags: Option<Vec<Tag>>,
    /// Describes the input source and the way the transform job consumes it.
    pub transform_input: TransformInput,
    /// The name of the transform job. The name must be unique within an Amazon Web Services
    /// Region in an Amazon Web Services account.
    pub transform_job_name: String,
    /// Describes the results of the transform job.
    pub transform_output: TransformOutput,
    /// Describes the resources, including ML instance types and ML instance count, to use for the
    /// transform job.
    pub transform_resources: TransformResources,
}

/// The data structure used to specify the data to be used for inference in a batch transform job
/// and to associate the data that is relevant to the prediction results in the output.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProcessing {
    /// A JSONPath expression used to select a portion of the input data to pass to the algorithm.
    pub input_filter: Option<String>,
    /// Specifies the source of the data to join with the transformed data. Input or None.
    pub join_source: Option<String>,
    /// A JSONPath expression used to select a portion of the joined dataset to save in the output
    /// file for a batch transform job.
    pub output_filter: Option<String>,
}

/// Associates a SageMaker job as a trial component with an experiment and trial.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentConfig {
    /// The name of an existing experiment to associate with the trial component.
    pub experiment_name: Option<String>,
    /// The display name for the trial component.
    pub trial_component_display_name: Option<String>,
    /// The name of an existing trial to associate the trial component with.
    pub trial_name: Option<String>,
}

/// Configures the timeout and maximum number of retries for processing a transform job
/// invocation.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelClientConfig {
    /// The maximum number of retries when invocation requests are failing.
    pub invocations_max_retries: Option<i64>,
    /// The timeout value in seconds for an invocation request.
    pub invocations_timeout_in_seconds: Option<i64>,
}

/// Describes the input source of a transform job and the way the transform job consumes it.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformInput {
    /// If your transform data is compressed, specify the compression type. None or Gzip.
    pub compression_type: Option<String>,
    /// The multipurpose internet mail extension (MIME) type of the data.
    pub content_type: Option<String>,
    /// Describes the location of the channel data.
    pub data_source: Option<TransformDataSource>,
    /// The method to use to split the transform job's data files into smaller batches. None,
    /// Line, RecordIO or TFRecord.
    pub split_type: Option<String>,
}

/// Describes the location of the channel data.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformDataSource {
    /// Describes the S3 data source.
    pub s3_data_source: Option<TransformS3DataSource>,
}

/// Describes the S3 data source.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformS3DataSource {
    /// ManifestFile, S3Prefix or AugmentedManifestFile.
    pub s3_data_type: Option<String>,
    /// Depending on the value specified for the S3DataType, identifies either a key name prefix or
    /// a manifest.
    #[serde(rename = "s3URI")]
    pub s3_uri: Option<String>,
}

/// Describes the results of a transform job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    /// The MIME type used to specify the output data.
    pub accept: Option<String>,
    /// Defines how to assemble the results of the transform job as a single S3 object. None or
    /// Line.
    pub assemble_with: Option<String>,
    /// The Amazon Web Services Key Management Service (Amazon Web Services KMS) key that SageMaker
    /// uses to encrypt the model artifacts at rest using Amazon S3 server-side encryption.
    #[serde(rename = "kmsKeyID")]
    pub kms_key_id: Option<String>,
    /// The Amazon S3 path where you want Amazon SageMaker to store the results of the transform
    /// job.
    pub s3_output_path: Option<String>,
}

/// Describes the resources, including ML instance types and ML instance count, to use for
/// transform job.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResources {
    /// The number of ML compute instances to use in the transform job.
    pub instance_count: Option<i64>,
    /// The ML compute instance type for the transform job.
    pub instance_type: Option<String>,
    /// The Amazon Web Services Key Management Service (Amazon Web Services KMS) key that Amazon
    /// SageMaker uses to encrypt model data on the storage volume attached to the ML compute
    /// instance(s) that run the batch transform job.
    #[serde(rename = "volumeKMSKeyID")]
    pub volume_kms_key_id: Option<String>,
}
