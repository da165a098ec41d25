/*!

Models of the custom resources served by the ACK SageMaker controller. Each resource is a
`kube::CustomResource` in the `sagemaker.services.k8s.aws/v1alpha1` API. The `CustomResource`
derive on a `<Kind>Spec` struct produces a struct named `<Kind>` which represents the object in the
k8s API.

!*/

use crate::CrdExt;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::NamespaceResourceScope;
use kube::CustomResourceExt;
use std::fmt::Debug;

pub use app::{App, AppSpec};
pub use data_quality_job_definition::{
    DataQualityAppSpecification, DataQualityBaselineConfig, DataQualityJobDefinition,
    DataQualityJobDefinitionSpec, DataQualityJobInput, EndpointInput, MonitoringClusterConfig,
    MonitoringConstraintsResource, MonitoringNetworkConfig, MonitoringOutput,
    MonitoringOutputConfig, MonitoringResources, MonitoringS3Output, MonitoringStatisticsResource,
    MonitoringStoppingCondition,
};
pub use domain::{Domain, DomainSettings, DomainSpec, RStudioServerProDomainSettings};
pub use endpoint::{
    Alarm, AutoRollbackConfig, BlueGreenUpdatePolicy, CapacitySize, DeploymentConfig, Endpoint,
    EndpointSpec, TrafficRoutingConfig,
};
pub use endpoint_config::{
    AsyncInferenceClientConfig, AsyncInferenceConfig, AsyncInferenceNotificationConfig,
    AsyncInferenceOutputConfig, CaptureContentTypeHeader, CaptureOption, DataCaptureConfig,
    EndpointConfig, EndpointConfigSpec, ProductionVariant, ProductionVariantCoreDumpConfig,
    ProductionVariantServerlessConfig,
};
pub use feature_group::{
    DataCatalogConfig, FeatureDefinition, FeatureGroup, FeatureGroupSpec, OfflineStoreConfig,
    OnlineStoreConfig, OnlineStoreSecurityConfig, S3StorageConfig,
};
pub use model::{
    ContainerDefinition, ImageConfig, InferenceExecutionConfig, Model, ModelSpec,
    MultiModelConfig, RepositoryAuthConfig,
};
pub use model_package_group::{ModelPackageGroup, ModelPackageGroupSpec};
pub use notebook_instance::{
    InstanceMetadataServiceConfiguration, NotebookInstance, NotebookInstanceSpec,
};
pub use notebook_instance_lifecycle_config::{
    NotebookInstanceLifecycleConfig, NotebookInstanceLifecycleConfigSpec,
    NotebookInstanceLifecycleHook,
};
pub use shared::{
    CustomImage, JupyterServerAppSettings, KernelGatewayAppSettings, RStudioServerProAppSettings,
    ResourceSpec, SharingSettings, Tag, TensorBoardAppSettings, UserSettings, VpcConfig,
};
pub use transform_job::{
    DataProcessing, ExperimentConfig, ModelClientConfig, TransformDataSource, TransformInput,
    TransformJob, TransformJobSpec, TransformOutput, TransformResources, TransformS3DataSource,
};
pub use user_profile::{UserProfile, UserProfileSpec};

mod app;
mod data_quality_job_definition;
mod domain;
mod endpoint;
mod endpoint_config;
mod feature_group;
mod model;
mod model_package_group;
mod notebook_instance;
mod notebook_instance_lifecycle_config;
mod shared;
mod transform_job;
mod user_profile;

/// Everything generic code needs to know about one of the SageMaker custom resources: its
/// group/version/kind/plural (from `kube::Resource`), its CRD schema (from `CustomResourceExt`) and
/// how to read and render it (from `CrdExt`).
pub trait SageMakerResource:
    kube::Resource<DynamicType = (), Scope = NamespaceResourceScope>
    + CustomResourceExt
    + CrdExt
    + Clone
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
{
}

macro_rules! sagemaker_resource {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl CrdExt for $kind {
                fn object_meta(&self) -> &k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
                    &self.metadata
                }
            }

            impl SageMakerResource for $kind {}
        )+
    };
}

sagemaker_resource!(
    App,
    DataQualityJobDefinition,
    Domain,
    Endpoint,
    EndpointConfig,
    FeatureGroup,
    Model,
    ModelPackageGroup,
    NotebookInstance,
    NotebookInstanceLifecycleConfig,
    TransformJob,
    UserProfile,
);

/// The CRDs of every SageMaker resource, e.g. for installing them into a test cluster.
pub fn crds() -> Vec<CustomResourceDefinition> {
    vec![
        App::crd(),
        DataQualityJobDefinition::crd(),
        Domain::crd(),
        Endpoint::crd(),
        EndpointConfig::crd(),
        FeatureGroup::crd(),
        Model::crd(),
        ModelPackageGroup::crd(),
        NotebookInstance::crd(),
        NotebookInstanceLifecycleConfig::crd(),
        TransformJob::crd(),
        UserProfile::crd(),
    ]
}
