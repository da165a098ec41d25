/*!

Drives the data sources through a real `kube::Client` against a mock Kubernetes API server.

!*/

use ack_sagemaker_provider::Provider;
use kube::{Client, Config};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_DATA_SOURCE: &str = "k8s_sagemaker_services_k8s_aws_model_v1alpha1";
const MODEL_PATH: &str = "/apis/sagemaker.services.k8s.aws/v1alpha1/namespaces/ml/models/xgboost";

async fn provider(mock_server: &MockServer) -> Provider {
    let config = Config::new(mock_server.uri().parse::<http::Uri>().unwrap());
    Provider::with_reader(Arc::new(Client::try_from(config).unwrap()))
}

fn config() -> Value {
    json!({ "metadata": { "name": "xgboost", "namespace": "ml" } })
}

fn summaries(provider_response: &ack_sagemaker_provider::ReadResponse) -> Vec<String> {
    provider_response
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.summary.clone())
        .collect()
}

#[tokio::test]
async fn reads_the_object_from_the_api_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "sagemaker.services.k8s.aws/v1alpha1",
            "kind": "Model",
            "metadata": {
                "name": "xgboost",
                "namespace": "ml",
                "uid": "8f0c4e62-3b4a-4f0e-9a53-0d1f3c8b7d11",
                "annotations": { "services.k8s.aws/region": "us-west-2" }
            },
            "spec": {
                "modelName": "xgboost",
                "executionRoleARN": "arn:aws:iam::123456789012:role/sagemaker",
                "containers": [
                    { "image": "xgboost:1", "environment": { "SAGEMAKER_PROGRAM": "inference.py" } }
                ]
            },
            "status": {
                "ackResourceMetadata": { "region": "us-west-2" }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = provider(&mock_server)
        .await
        .read(MODEL_DATA_SOURCE, &config())
        .await;
    assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
    let state = response.state.unwrap();
    assert_eq!(state["id"], "ml/xgboost");
    assert_eq!(state["kind"], "Model");
    assert_eq!(
        state["metadata"]["annotations"]["services.k8s.aws/region"],
        "us-west-2"
    );
    assert_eq!(
        state["spec"]["execution_role_arn"],
        "arn:aws:iam::123456789012:role/sagemaker"
    );
    assert_eq!(state["spec"]["containers"][0]["image"], "xgboost:1");
    assert_eq!(
        state["spec"]["containers"][0]["environment"]["SAGEMAKER_PROGRAM"],
        "inference.py"
    );
    assert_eq!(state["spec"]["primary_container"], Value::Null);
}

#[tokio::test]
async fn not_found_status_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "message": "models.sagemaker.services.k8s.aws \"xgboost\" not found",
            "reason": "NotFound",
            "details": { "name": "xgboost", "group": "sagemaker.services.k8s.aws", "kind": "models" },
            "code": 404
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = provider(&mock_server)
        .await
        .read(MODEL_DATA_SOURCE, &config())
        .await;
    assert!(response.state.is_none());
    assert_eq!(summaries(&response), vec!["Unable to find resource"]);
}

#[tokio::test]
async fn server_errors_are_get_failures_without_retries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "message": "etcdserver: request timed out",
            "reason": "InternalError",
            "code": 500
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = provider(&mock_server)
        .await
        .read(MODEL_DATA_SOURCE, &config())
        .await;
    assert!(response.state.is_none());
    assert_eq!(summaries(&response), vec!["Unable to GET resource"]);
}
