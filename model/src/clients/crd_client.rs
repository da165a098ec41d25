use crate::clients::error::{self, Result};
use crate::sagemaker::SageMakerResource;
use kube::api::{ApiResource, DynamicObject};
use kube::Api;
use log::trace;
use snafu::ResultExt;
use std::marker::PhantomData;
use std::sync::Arc;

/// The one call of the Kubernetes dynamic client that reading a custom resource needs: GET a
/// namespaced object of the given group/version/resource by name.
#[async_trait::async_trait]
pub trait CrdReader: Send + Sync {
    async fn get_namespaced(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> std::result::Result<DynamicObject, kube::Error>;
}

#[async_trait::async_trait]
impl CrdReader for kube::Client {
    async fn get_namespaced(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> std::result::Result<DynamicObject, kube::Error> {
        Api::<DynamicObject>::namespaced_with(self.clone(), namespace, resource)
            .get(name)
            .await
    }
}

/// An API client for SageMaker custom resources of kind `K` in one namespace.
///
/// # Example
///
/// ```
///# use ack_sagemaker_model::clients::CrdClient;
///# use ack_sagemaker_model::sagemaker::Model;
///# async fn no_run() {
/// let client = CrdClient::<Model>::try_default("ml").await.unwrap();
/// let model = client.get("my-model").await.unwrap();
///# }
/// ```
pub struct CrdClient<K> {
    reader: Arc<dyn CrdReader>,
    resource: ApiResource,
    namespace: String,
    _kind: PhantomData<K>,
}

impl<K> CrdClient<K>
where
    K: SageMakerResource,
{
    pub fn new<S>(reader: Arc<dyn CrdReader>, namespace: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            reader,
            resource: ApiResource::erase::<K>(&()),
            namespace: namespace.into(),
            _kind: PhantomData,
        }
    }

    /// Create a client from the default `kube::Client`, i.e. the in-cluster configuration or the
    /// local kubeconfig.
    pub async fn try_default<S>(namespace: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let k8s_client = kube::Client::try_default()
            .await
            .context(error::InitializationSnafu)?;
        Ok(Self::new(Arc::new(k8s_client), namespace))
    }

    pub fn kind(&self) -> &str {
        &self.resource.kind
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// GET the object named `name` and unmarshal it into `K`. A single request is made; errors
    /// from the API server are returned as they are.
    pub async fn get<S>(&self, name: S) -> Result<K>
    where
        S: AsRef<str> + Send,
    {
        let name: &str = name.as_ref();
        trace!(
            "getting {} '{}' in namespace '{}'",
            self.kind(),
            name,
            self.namespace
        );
        let object = self
            .reader
            .get_namespaced(&self.resource, &self.namespace, name)
            .await
            .context(error::KubeApiCallSnafu {
                method: "get",
                what: self.kind(),
                name,
            })?;
        let value = serde_json::to_value(&object).context(error::SerdeSnafu {
            what: self.kind(),
            name,
        })?;
        Ok(serde_json::from_value(value).context(error::DeserializeSnafu {
            what: self.kind(),
            name,
        })?)
    }
}
