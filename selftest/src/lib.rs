/*!

Provides utilities for testing the provider against a `kind` cluster that has the ACK SageMaker
CRDs installed. No SageMaker controller runs in the cluster, so objects stay exactly as they were
created.

!*/

pub mod cluster;
mod test_settings;

pub use cluster::Cluster;
