use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

const MODEL_MANIFEST: &str = "k8s_sagemaker_services_k8s_aws_model_v1alpha1_manifest";

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stdout(cmd: &mut Command) -> String {
    String::from_utf8(cmd.assert().success().get_output().stdout.clone()).unwrap()
}

#[test]
fn lists_types() {
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.arg("types");
    let output = stdout(&mut cmd);
    assert_eq!(output.lines().count(), 24);
    assert!(output
        .lines()
        .any(|line| line == "k8s_sagemaker_services_k8s_aws_transform_job_v1alpha1"));

    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&["types", "--manifests"]);
    let output = stdout(&mut cmd);
    assert_eq!(output.lines().count(), 12);
    assert!(output.lines().all(|line| line.ends_with("_manifest")));
}

#[test]
fn prints_schema() {
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&["schema", "k8s_sagemaker_services_k8s_aws_domain_v1alpha1"]);
    let schema: serde_json::Value = serde_json::from_str(&stdout(&mut cmd)).unwrap();
    assert_eq!(schema["attributes"]["id"]["mode"], "computed");
    assert_eq!(schema["attributes"]["metadata"]["mode"], "required");
    assert_eq!(schema["attributes"]["spec"]["mode"], "computed");
    assert_eq!(
        schema["attributes"]["spec"]["type"]["object"]["subnet_ids"]["json_name"],
        "subnetIDs"
    );
}

#[test]
fn unknown_type_fails() {
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&["schema", "k8s_core_v1_pod"]);
    let output = cmd.assert().failure().get_output().clone();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown data source type"));
}

#[test]
fn renders_manifest() {
    let config = config_file(
        r#"
metadata:
  name: xgboost
  namespace: ml
spec:
  model_name: xgboost
  primary_container:
    image: xgboost
"#,
    );
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&[
        "manifest",
        "k8s_sagemaker_services_k8s_aws_model_v1alpha1",
        "--config",
        config.path().to_str().unwrap(),
    ]);
    let yaml = stdout(&mut cmd);
    assert!(yaml.contains("apiVersion: sagemaker.services.k8s.aws/v1alpha1"));
    assert!(yaml.contains("kind: Model"));
    assert!(yaml.contains("primaryContainer:"));
}

#[test]
fn read_manifest_offline_prints_state() {
    let config = config_file(
        r#"{
  "metadata": { "name": "churn", "namespace": "ml" },
  "spec": { "model_package_group_name": "churn" }
}"#,
    );
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&[
        "--offline",
        "read",
        "k8s_sagemaker_services_k8s_aws_model_package_group_v1alpha1_manifest",
        "-f",
        config.path().to_str().unwrap(),
    ]);
    let state: serde_json::Value = serde_json::from_str(&stdout(&mut cmd)).unwrap();
    assert_eq!(state["id"], "ml/churn");
    assert!(state["yaml"]
        .as_str()
        .unwrap()
        .contains("modelPackageGroupName: churn"));
}

#[test]
fn invalid_config_reports_diagnostics() {
    let config = config_file(
        r#"
metadata:
  name: xgboost
spec:
  modelName: xgboost
"#,
    );
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&[
        "manifest",
        MODEL_MANIFEST,
        "--config",
        config.path().to_str().unwrap(),
    ]);
    let output = cmd.assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing required argument (at metadata.namespace)"));
    assert!(stderr.contains("Unsupported argument (at spec.modelName)"));
}

#[test]
fn data_source_offline_has_no_client() {
    let config = config_file("metadata: { name: xgboost, namespace: ml }");
    let mut cmd = Command::cargo_bin("ack-sagemaker").unwrap();
    cmd.args(&[
        "--offline",
        "read",
        "k8s_sagemaker_services_k8s_aws_model_v1alpha1",
        "--config",
        config.path().to_str().unwrap(),
    ]);
    let output = cmd.assert().failure().get_output().clone();
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing Kubernetes client"));
}
