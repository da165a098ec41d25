use super::shared::Tag;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// EndpointSpec defines the desired state of Endpoint.
///
/// A hosted endpoint for real-time inference.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[kube(
    derive = "Default",
    derive = "PartialEq",
    group = "sagemaker.services.k8s.aws",
    kind = "Endpoint",
    namespaced,
    plural = "endpoints",
    singular = "endpoint",
    version = "v1alpha1"
)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSpec {
    /// The deployment configuration for an endpoint, which contains the desired deployment
    /// strategy and rollback configurations.
    pub deployment_config: Option<DeploymentConfig>,
    /// The name of an endpoint configuration.
    pub endpoint_config_name: String,
    /// The name of the endpoint. The name must be unique within an Amazon Web Services Region in
    /// your Amazon Web Services account.
    pub endpoint_name: String,
    /// An array of key-value pairs.
    pub tags: Option<Vec<Tag>>,
}

/// The deployment configuration for an endpoint, which contains the desired deployment strategy
/// and rollback configurations.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Automatic rollback configuration for handling endpoint deployment failures and recovery.
    pub auto_rollback_configuration: Option<AutoRollbackConfig>,
    /// Update policy for a blue/green deployment.
    pub blue_green_update_policy: Option<BlueGreenUpdatePolicy>,
}

/// Automatic rollback configuration for handling endpoint deployment failures and recovery.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoRollbackConfig {
    /// List of CloudWatch alarms in your account that are configured to monitor metrics on an
    /// endpoint.
    pub alarms: Option<Vec<Alarm>>,
}

/// An Amazon CloudWatch alarm configured to monitor metrics on an endpoint.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    /// The name of a CloudWatch alarm in your account.
    pub alarm_name: Option<String>,
}

/// Update policy for a blue/green deployment.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueGreenUpdatePolicy {
    /// Maximum execution timeout for the deployment.
    pub maximum_execution_timeout_in_seconds: Option<i64>,
    /// Additional waiting time in seconds after the completion of an endpoint deployment before
    /// terminating the old endpoint fleet.
    pub termination_wait_in_seconds: Option<i64>,
    /// Defines the traffic routing strategy during an endpoint deployment to shift traffic from
    /// the old fleet to the new fleet.
    pub traffic_routing_configuration: Option<TrafficRoutingConfig>,
}

/// Defines the traffic routing strategy during an endpoint deployment to shift traffic from the
/// old fleet to the new fleet.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficRoutingConfig {
    /// Batch size for the first step to turn on traffic on the new endpoint fleet.
    pub canary_size: Option<CapacitySize>,
    /// Batch size for each step to turn on traffic on the new endpoint fleet.
    pub linear_step_size: Option<CapacitySize>,
    /// Traffic routing strategy type. AllAtOnce, Canary or Linear.
    #[serde(rename = "type_")]
    pub type_: Option<String>,
    /// The waiting time (in seconds) between incremental steps to turn on traffic on the new
    /// endpoint fleet.
    pub wait_interval_in_seconds: Option<i64>,
}

/// Specifies the endpoint capacity to activate for production.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySize {
    /// Specifies the endpoint capacity type. InstanceCount or CapacityPercent.
    #[serde(rename = "type_")]
    pub type_: Option<String>,
    /// Defines the capacity size, either as a number of instances or a capacity percentage.
    pub value: Option<i64>,
}
