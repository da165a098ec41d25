use crate::diagnostics::{AttributePath, Diagnostics};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

const DNS_SUBDOMAIN_MAX_LEN: usize = 253;
const DNS_LABEL_MAX_LEN: usize = 63;
const QUALIFIED_NAME_MAX_LEN: usize = 63;
const LABEL_VALUE_MAX_LEN: usize = 63;

const SUMMARY: &str = "Invalid Attribute Value";

lazy_static! {
    static ref DNS_SUBDOMAIN: Regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap();
    static ref DNS_LABEL: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap();
    static ref QUALIFIED_NAME: Regex =
        Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap();
    static ref LABEL_VALUE: Regex =
        Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").unwrap();
}

/// Checks on attribute values that go beyond their type. All of them mirror what the Kubernetes
/// API server would reject for `ObjectMeta`.
#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// A DNS-1123 subdomain, e.g. `metadata.name`.
    Name,
    /// A DNS-1123 label, e.g. `metadata.namespace`.
    Namespace,
    /// A map of qualified names to label values.
    Labels,
    /// A map of qualified names to anything.
    Annotations,
}

impl Validator {
    /// Adds a diagnostic for each problem with `value`. Null values and values of the wrong type
    /// are not checked here.
    pub fn validate(&self, path: &AttributePath, value: &Value, diagnostics: &mut Diagnostics) {
        match self {
            Validator::Name => {
                if let Some(name) = value.as_str() {
                    if let Err(detail) = dns_subdomain(name) {
                        diagnostics.add_attribute_error(path, SUMMARY, detail);
                    }
                }
            }
            Validator::Namespace => {
                if let Some(namespace) = value.as_str() {
                    if let Err(detail) = dns_label(namespace) {
                        diagnostics.add_attribute_error(path, SUMMARY, detail);
                    }
                }
            }
            Validator::Labels => {
                for (key, value) in value.as_object().into_iter().flatten() {
                    let path = path.key(key.as_str());
                    if let Err(detail) = qualified_name(key) {
                        diagnostics.add_attribute_error(&path, SUMMARY, detail);
                    }
                    if let Some(value) = value.as_str() {
                        if let Err(detail) = label_value(value) {
                            diagnostics.add_attribute_error(&path, SUMMARY, detail);
                        }
                    }
                }
            }
            Validator::Annotations => {
                for key in value.as_object().into_iter().flat_map(|map| map.keys()) {
                    if let Err(detail) = qualified_name(key) {
                        diagnostics.add_attribute_error(&path.key(key.as_str()), SUMMARY, detail);
                    }
                }
            }
        }
    }
}

fn dns_subdomain(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("The name must not be empty.".to_string());
    }
    if value.len() > DNS_SUBDOMAIN_MAX_LEN {
        return Err(format!(
            "'{}' must be no more than {} characters.",
            value, DNS_SUBDOMAIN_MAX_LEN
        ));
    }
    if !DNS_SUBDOMAIN.is_match(value) {
        return Err(format!(
            "'{}' must consist of lower case alphanumeric characters, '-' or '.', and must start \
            and end with an alphanumeric character.",
            value
        ));
    }
    Ok(())
}

fn dns_label(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("The namespace must not be empty.".to_string());
    }
    if value.len() > DNS_LABEL_MAX_LEN {
        return Err(format!(
            "'{}' must be no more than {} characters.",
            value, DNS_LABEL_MAX_LEN
        ));
    }
    if !DNS_LABEL.is_match(value) {
        return Err(format!(
            "'{}' must consist of lower case alphanumeric characters or '-', and must start and \
            end with an alphanumeric character.",
            value
        ));
    }
    Ok(())
}

/// A key with an optional DNS subdomain prefix, e.g. `app.kubernetes.io/name`.
fn qualified_name(value: &str) -> Result<(), String> {
    let name = match value.rsplit_once('/') {
        Some((prefix, name)) => {
            dns_subdomain(prefix)
                .map_err(|_| format!("The prefix of '{}' must be a DNS subdomain.", value))?;
            name
        }
        None => value,
    };
    if name.is_empty() || name.len() > QUALIFIED_NAME_MAX_LEN || !QUALIFIED_NAME.is_match(name) {
        return Err(format!(
            "'{}' must be a qualified name: at most {} alphanumeric characters, '-', '_' or '.', \
            starting and ending with an alphanumeric character, with an optional DNS subdomain \
            prefix followed by '/'.",
            value, QUALIFIED_NAME_MAX_LEN
        ));
    }
    Ok(())
}

fn label_value(value: &str) -> Result<(), String> {
    if value.len() > LABEL_VALUE_MAX_LEN || !LABEL_VALUE.is_match(value) {
        return Err(format!(
            "The label value '{}' must be at most {} alphanumeric characters, '-', '_' or '.', \
            starting and ending with an alphanumeric character.",
            value, LABEL_VALUE_MAX_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn errors(validator: Validator, value: Value) -> Vec<String> {
        let mut diagnostics = Diagnostics::new();
        validator.validate(
            &AttributePath::root().attribute("metadata").attribute("x"),
            &value,
            &mut diagnostics,
        );
        diagnostics
            .iter()
            .map(|diagnostic| diagnostic.attribute.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn names() {
        assert!(errors(Validator::Name, json!("xgboost")).is_empty());
        assert!(errors(Validator::Name, json!("model.v1-a")).is_empty());
        assert_eq!(errors(Validator::Name, json!("")).len(), 1);
        assert_eq!(errors(Validator::Name, json!("Upper")).len(), 1);
        assert_eq!(errors(Validator::Name, json!("-dash")).len(), 1);
        assert_eq!(errors(Validator::Name, json!("a".repeat(254))).len(), 1);
        assert!(errors(Validator::Name, json!("a".repeat(253))).is_empty());
    }

    #[test]
    fn namespaces() {
        assert!(errors(Validator::Namespace, json!("ml")).is_empty());
        assert_eq!(errors(Validator::Namespace, json!("")).len(), 1);
        assert_eq!(errors(Validator::Namespace, json!("has.dot")).len(), 1);
        assert_eq!(errors(Validator::Namespace, json!("a".repeat(64))).len(), 1);
    }

    #[test]
    fn labels() {
        assert!(errors(
            Validator::Labels,
            json!({"app.kubernetes.io/name": "xgboost", "empty": ""})
        )
        .is_empty());
        assert_eq!(
            errors(Validator::Labels, json!({"app": "-bad"})),
            vec![r#"metadata.x["app"]"#.to_string()]
        );
        assert_eq!(
            errors(Validator::Labels, json!({"Bad_Prefix/app": "ok"})).len(),
            1
        );
        assert_eq!(
            errors(Validator::Labels, json!({"app": "v".repeat(64)})).len(),
            1
        );
    }

    #[test]
    fn annotations() {
        assert!(errors(
            Validator::Annotations,
            json!({"example.com/note": "anything: goes here!"})
        )
        .is_empty());
        assert_eq!(errors(Validator::Annotations, json!({"/": "x"})).len(), 1);
    }
}
