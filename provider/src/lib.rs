/*!

Terraform-style data sources and manifests for the custom resources of the ACK SageMaker
controller.

For every resource kind there are two types:

- a data source, e.g. `k8s_sagemaker_services_k8s_aws_model_v1alpha1`, which reads the object
  named by `metadata.name` and `metadata.namespace` from the cluster and exposes its spec,
- a manifest, e.g. `k8s_sagemaker_services_k8s_aws_model_v1alpha1_manifest`, which renders its
  configuration as a YAML document without contacting a cluster.

Configuration and state use snake_case attribute names, the Kubernetes objects use the camelCase
field names of the CRDs.

!*/

pub use config::ProviderConfig;
pub use data_source::{CrdDataSource, DataSource, ProviderData, ReadResponse};
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use manifest::CrdManifest;
pub use provider::{Provider, SchemaResponse};
pub use schema::{Attribute, AttributeType, Mode, Schema};
pub use validators::Validator;

mod config;
mod data_source;
mod diagnostics;
mod error;
mod manifest;
pub mod naming;
mod provider;
pub mod schema;
mod validators;
