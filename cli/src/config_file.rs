use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Reads data source configuration in Terraform attribute form from a YAML or JSON file.
pub(crate) async fn read_config(path: &Path) -> Result<Value> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .context(format!("Unable to read config file '{}'", path.display()))?;
    // JSON is valid YAML, so one parser handles both.
    serde_yaml::from_str(&contents).context(format!(
        "Unable to parse config file '{}'",
        path.display()
    ))
}
