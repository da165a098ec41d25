/*!

Terraform-style schemas for the SageMaker resources. The `spec` attribute tree is not written by
hand; it is derived from the OpenAPI v3 schema of the CRD that `kube::CustomResourceExt::crd()`
builds from the model, so attribute descriptions are the doc comments of the model fields.

!*/

use crate::diagnostics::{AttributePath, Diagnostics};
use crate::naming::snake_case;
use crate::validators::Validator;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use model::SageMakerResource;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The name of the field in the Kubernetes object. Empty for attributes that only exist in
    /// Terraform state (`id`, `yaml`).
    pub json_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(BTreeMap<String, Attribute>),
    /// Anything JSON can hold, for fields the CRD leaves untyped.
    Dynamic,
}

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Required,
    Optional,
    Computed,
}

impl Attribute {
    pub fn new<S1, S2>(
        json_name: S1,
        description: S2,
        attribute_type: AttributeType,
        mode: Mode,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            json_name: json_name.into(),
            description: description.into(),
            attribute_type,
            mode,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

impl AttributeType {
    fn describe(&self) -> String {
        match self {
            AttributeType::String => "string".to_string(),
            AttributeType::Int64 | AttributeType::Float64 => "number".to_string(),
            AttributeType::Bool => "bool".to_string(),
            AttributeType::List(element) => format!("list of {}", element.describe()),
            AttributeType::Map(element) => format!("map of {}", element.describe()),
            AttributeType::Object(_) => "object".to_string(),
            AttributeType::Dynamic => "any value".to_string(),
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::Int64 => value.is_i64() || value.is_u64(),
            AttributeType::Float64 => value.is_number(),
            AttributeType::Bool => value.is_boolean(),
            AttributeType::List(_) => value.is_array(),
            AttributeType::Map(_) | AttributeType::Object(_) => value.is_object(),
            AttributeType::Dynamic => true,
        }
    }
}

/// The schema of the `spec` of `K`, with every attribute computed (`computed = true`) or with
/// modes following the `required` lists of the CRD.
pub fn spec_attribute<K>(computed: bool) -> Attribute
where
    K: SageMakerResource,
{
    match crd_spec_props::<K>() {
        Some(props) => {
            let description = props
                .description
                .clone()
                .unwrap_or_else(|| format!("The desired state of the {}.", K::kind(&())));
            let attribute_type = attribute_type(&props, computed);
            let mode = if computed {
                Mode::Computed
            } else if any_required(&attribute_type) {
                Mode::Required
            } else {
                Mode::Optional
            };
            Attribute::new("spec", description, attribute_type, mode)
        }
        None => Attribute::new(
            "spec",
            format!("The desired state of the {}.", K::kind(&())),
            AttributeType::Dynamic,
            if computed {
                Mode::Computed
            } else {
                Mode::Optional
            },
        ),
    }
}

/// The `metadata` block shared by data sources and manifests. `name` and `namespace` identify the
/// object and are always required; `labels` and `annotations` take `map_mode`.
pub fn metadata_attribute(map_mode: Mode) -> Attribute {
    let attributes = btree(vec![
        (
            "name",
            Attribute::new(
                "name",
                "Unique name of this object within its namespace.",
                AttributeType::String,
                Mode::Required,
            )
            .with_validator(Validator::Name),
        ),
        (
            "namespace",
            Attribute::new(
                "namespace",
                "The namespace of this object.",
                AttributeType::String,
                Mode::Required,
            )
            .with_validator(Validator::Namespace),
        ),
        (
            "labels",
            Attribute::new(
                "labels",
                "Map of string keys and values that can be used to organize and categorize \
                objects.",
                AttributeType::Map(Box::new(AttributeType::String)),
                map_mode,
            )
            .with_validator(Validator::Labels),
        ),
        (
            "annotations",
            Attribute::new(
                "annotations",
                "Unstructured key value map stored with a resource that may be set by external \
                tools to store and retrieve arbitrary metadata.",
                AttributeType::Map(Box::new(AttributeType::String)),
                map_mode,
            )
            .with_validator(Validator::Annotations),
        ),
    ]);
    Attribute::new(
        "metadata",
        "Data that helps uniquely identify the object.",
        AttributeType::Object(attributes),
        Mode::Required,
    )
}

pub(crate) fn btree(attributes: Vec<(&str, Attribute)>) -> BTreeMap<String, Attribute> {
    attributes
        .into_iter()
        .map(|(name, attribute)| (name.to_string(), attribute))
        .collect()
}

fn crd_spec_props<K>() -> Option<JSONSchemaProps>
where
    K: SageMakerResource,
{
    K::crd()
        .spec
        .versions
        .into_iter()
        .find(|version| version.name == K::version(&()))?
        .schema?
        .open_api_v3_schema?
        .properties?
        .remove("spec")
        .map(flatten_all_of)
}

/// schemars wraps some nested schemas in a single element `allOf`; fold it into the parent.
fn flatten_all_of(mut props: JSONSchemaProps) -> JSONSchemaProps {
    match props.all_of.take() {
        Some(all_of) if all_of.len() == 1 => {
            let mut inner = all_of.into_iter().next().map(flatten_all_of).unwrap_or_default();
            if props.description.is_some() {
                inner.description = props.description;
            }
            inner
        }
        all_of => {
            props.all_of = all_of;
            props
        }
    }
}

fn attribute_type(props: &JSONSchemaProps, computed: bool) -> AttributeType {
    match props.type_.as_deref() {
        Some("string") => AttributeType::String,
        Some("integer") => AttributeType::Int64,
        Some("number") => AttributeType::Float64,
        Some("boolean") => AttributeType::Bool,
        Some("array") => {
            let element = match &props.items {
                Some(JSONSchemaPropsOrArray::Schema(items)) => {
                    attribute_type(&flatten_all_of(items.as_ref().clone()), computed)
                }
                Some(JSONSchemaPropsOrArray::Schemas(items)) if items.len() == 1 => {
                    attribute_type(&flatten_all_of(items[0].clone()), computed)
                }
                _ => AttributeType::Dynamic,
            };
            AttributeType::List(Box::new(element))
        }
        Some("object") => match (&props.properties, &props.additional_properties) {
            (Some(properties), _) => AttributeType::Object(object_attributes(
                properties,
                props.required.as_deref().unwrap_or_default(),
                computed,
            )),
            (None, Some(JSONSchemaPropsOrBool::Schema(values))) => AttributeType::Map(Box::new(
                attribute_type(&flatten_all_of(values.as_ref().clone()), computed),
            )),
            _ => AttributeType::Dynamic,
        },
        _ => AttributeType::Dynamic,
    }
}

fn object_attributes(
    properties: &BTreeMap<String, JSONSchemaProps>,
    required: &[String],
    computed: bool,
) -> BTreeMap<String, Attribute> {
    properties
        .iter()
        .map(|(json_name, props)| {
            let props = flatten_all_of(props.clone());
            let mode = if computed {
                Mode::Computed
            } else if required.contains(json_name) {
                Mode::Required
            } else {
                Mode::Optional
            };
            let attribute = Attribute::new(
                json_name.as_str(),
                props.description.clone().unwrap_or_default(),
                attribute_type(&props, computed),
                mode,
            );
            (snake_case(json_name), attribute)
        })
        .collect()
}

fn any_required(attribute_type: &AttributeType) -> bool {
    match attribute_type {
        AttributeType::Object(attributes) => attributes
            .values()
            .any(|attribute| attribute.mode == Mode::Required),
        _ => false,
    }
}

/// Converts a Kubernetes JSON value (camelCase field names) into Terraform state (snake_case
/// attribute names). Every attribute is present in the result, with `null` where the object has no
/// value.
pub fn to_state(attribute_type: &AttributeType, value: Option<&Value>) -> Value {
    let value = match value {
        None | Some(Value::Null) => return Value::Null,
        Some(value) => value,
    };
    match (attribute_type, value) {
        (AttributeType::List(element), Value::Array(values)) => Value::Array(
            values
                .iter()
                .map(|value| to_state(element, Some(value)))
                .collect(),
        ),
        (AttributeType::Map(element), Value::Object(values)) => Value::Object(
            values
                .iter()
                .map(|(key, value)| (key.clone(), to_state(element, Some(value))))
                .collect(),
        ),
        (AttributeType::Object(attributes), Value::Object(values)) => Value::Object(
            attributes
                .iter()
                .map(|(name, attribute)| {
                    (
                        name.clone(),
                        to_state(&attribute.attribute_type, values.get(&attribute.json_name)),
                    )
                })
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Converts Terraform configuration (snake_case attribute names) into a Kubernetes JSON value
/// (camelCase field names). Null values are left out.
pub fn to_json(attribute_type: &AttributeType, value: &Value) -> Value {
    match (attribute_type, value) {
        (AttributeType::List(element), Value::Array(values)) => Value::Array(
            values
                .iter()
                .map(|value| to_json(element, value))
                .collect(),
        ),
        (AttributeType::Map(element), Value::Object(values)) => Value::Object(
            values
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), to_json(element, value)))
                .collect(),
        ),
        (AttributeType::Object(attributes), Value::Object(values)) => Value::Object(
            attributes
                .iter()
                .filter_map(|(name, attribute)| {
                    let value = values.get(name).filter(|value| !value.is_null())?;
                    Some((
                        attribute.json_name.clone(),
                        to_json(&attribute.attribute_type, value),
                    ))
                })
                .collect(),
        ),
        _ => value.clone(),
    }
}

impl Schema {
    /// Checks `config` against the schema and returns a diagnostic for every unsupported argument,
    /// missing required argument, value set on a computed attribute, value of the wrong type and
    /// validator failure.
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        match config {
            Value::Object(values) => validate_object(
                &self.attributes,
                values,
                &AttributePath::root(),
                &mut diagnostics,
            ),
            Value::Null => validate_object(
                &self.attributes,
                &Map::new(),
                &AttributePath::root(),
                &mut diagnostics,
            ),
            _ => diagnostics.add_error(
                "Invalid configuration",
                "The configuration must be an object of attribute names and values.",
            ),
        }
        diagnostics
    }
}

fn validate_object(
    attributes: &BTreeMap<String, Attribute>,
    values: &Map<String, Value>,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    for name in values.keys() {
        if !attributes.contains_key(name) {
            diagnostics.add_attribute_error(
                &path.attribute(name.as_str()),
                "Unsupported argument",
                format!("An argument named \"{}\" is not expected here.", name),
            );
        }
    }
    for (name, attribute) in attributes {
        let path = path.attribute(name.as_str());
        match values.get(name).filter(|value| !value.is_null()) {
            None if attribute.mode == Mode::Required => diagnostics.add_attribute_error(
                &path,
                "Missing required argument",
                format!(
                    "The argument \"{}\" is required, but no definition was found.",
                    name
                ),
            ),
            None => {}
            Some(_) if attribute.mode == Mode::Computed => diagnostics.add_attribute_error(
                &path,
                "Invalid Configuration for Read-Only Attribute",
                "Cannot set value for this attribute as the provider has marked it as read-only. \
                Remove the configuration line setting the value.",
            ),
            Some(value) => {
                if validate_value(&attribute.attribute_type, value, &path, diagnostics) {
                    for validator in &attribute.validators {
                        validator.validate(&path, value, diagnostics);
                    }
                }
            }
        }
    }
}

/// Returns false if `value` does not have the expected type.
fn validate_value(
    attribute_type: &AttributeType,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) -> bool {
    if !attribute_type.matches(value) {
        diagnostics.add_attribute_error(
            path,
            "Incorrect attribute value type",
            format!(
                "Inappropriate value for attribute \"{}\": {} required.",
                path.last_attribute().unwrap_or_default(),
                attribute_type.describe()
            ),
        );
        return false;
    }
    match (attribute_type, value) {
        (AttributeType::List(element), Value::Array(values)) => {
            for (i, value) in values.iter().enumerate() {
                validate_element(element, value, &path.index(i), diagnostics);
            }
        }
        (AttributeType::Map(element), Value::Object(values)) => {
            for (key, value) in values {
                validate_element(element, value, &path.key(key.as_str()), diagnostics);
            }
        }
        (AttributeType::Object(attributes), Value::Object(values)) => {
            validate_object(attributes, values, path, diagnostics)
        }
        _ => {}
    }
    true
}

fn validate_element(
    element: &AttributeType,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    if value.is_null() {
        diagnostics.add_attribute_error(
            path,
            "Invalid element value",
            "Null values are not allowed in lists and maps.",
        );
    } else {
        validate_value(element, value, path, diagnostics);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use model::sagemaker::{Domain, EndpointConfig, Model, ModelPackageGroup};
    use serde_json::json;

    fn object(attribute: &Attribute) -> &BTreeMap<String, Attribute> {
        match &attribute.attribute_type {
            AttributeType::Object(attributes) => attributes,
            other => panic!("expected an object, got {:?}", other),
        }
    }

    #[test]
    fn spec_tree_follows_the_crd() {
        let spec = spec_attribute::<Model>(false);
        assert_eq!(spec.mode, Mode::Required);
        let attributes = object(&spec);

        let model_name = &attributes["model_name"];
        assert_eq!(model_name.json_name, "modelName");
        assert_eq!(model_name.attribute_type, AttributeType::String);
        assert_eq!(model_name.mode, Mode::Required);
        assert!(!model_name.description.is_empty());

        let role = &attributes["execution_role_arn"];
        assert_eq!(role.json_name, "executionRoleARN");
        assert_eq!(role.mode, Mode::Optional);

        assert_eq!(
            attributes["enable_network_isolation"].attribute_type,
            AttributeType::Bool
        );

        let containers = &attributes["containers"];
        let element = match &containers.attribute_type {
            AttributeType::List(element) => element,
            other => panic!("expected a list, got {:?}", other),
        };
        let container = match element.as_ref() {
            AttributeType::Object(container) => container,
            other => panic!("expected an object, got {:?}", other),
        };
        assert_eq!(
            container["environment"].attribute_type,
            AttributeType::Map(Box::new(AttributeType::String))
        );
        assert_eq!(container["model_data_url"].json_name, "modelDataURL");

        let vpc_config = object(&attributes["vpc_config"]);
        assert_eq!(
            vpc_config["security_group_ids"].json_name,
            "securityGroupIDs"
        );
    }

    #[test]
    fn numbers_keep_their_kind() {
        let spec = spec_attribute::<EndpointConfig>(false);
        let variants = match &object(&spec)["production_variants"].attribute_type {
            AttributeType::List(element) => match element.as_ref() {
                AttributeType::Object(variant) => variant.clone(),
                other => panic!("expected an object, got {:?}", other),
            },
            other => panic!("expected a list, got {:?}", other),
        };
        assert_eq!(
            variants["initial_variant_weight"].attribute_type,
            AttributeType::Float64
        );
        assert_eq!(
            variants["initial_instance_count"].attribute_type,
            AttributeType::Int64
        );
        assert_eq!(variants["volume_size_in_gb"].json_name, "volumeSizeInGB");
    }

    #[test]
    fn computed_spec_is_computed_all_the_way_down() {
        fn all_computed(attribute_type: &AttributeType) -> bool {
            match attribute_type {
                AttributeType::Object(attributes) => attributes.values().all(|attribute| {
                    attribute.mode == Mode::Computed && all_computed(&attribute.attribute_type)
                }),
                AttributeType::List(element) | AttributeType::Map(element) => {
                    all_computed(element)
                }
                _ => true,
            }
        }
        let spec = spec_attribute::<Domain>(true);
        assert_eq!(spec.mode, Mode::Computed);
        assert!(all_computed(&spec.attribute_type));
        assert_eq!(object(&spec)["subnet_ids"].json_name, "subnetIDs");
    }

    #[test]
    fn state_has_every_attribute() {
        let spec = spec_attribute::<ModelPackageGroup>(true);
        let state = to_state(
            &spec.attribute_type,
            Some(&json!({
                "modelPackageGroupName": "churn",
                "tags": [{ "key": "team" }]
            })),
        );
        assert_eq!(state["model_package_group_name"], json!("churn"));
        assert_eq!(state["model_package_group_description"], Value::Null);
        assert_eq!(state["tags"], json!([{ "key": "team", "value": null }]));
        assert_eq!(to_state(&spec.attribute_type, None), Value::Null);
    }

    #[test]
    fn json_renames_fields_but_not_map_keys() {
        let spec = spec_attribute::<Model>(false);
        let json = to_json(
            &spec.attribute_type,
            &json!({
                "model_name": "xgboost",
                "execution_role_arn": null,
                "primary_container": {
                    "model_data_url": "s3://bucket/model.tar.gz",
                    "environment": { "SAGEMAKER_PROGRAM": "inference.py" }
                }
            }),
        );
        assert_eq!(
            json,
            json!({
                "modelName": "xgboost",
                "primaryContainer": {
                    "modelDataURL": "s3://bucket/model.tar.gz",
                    "environment": { "SAGEMAKER_PROGRAM": "inference.py" }
                }
            })
        );
    }

    fn manifest_like_schema() -> Schema {
        Schema {
            description: "test".to_string(),
            attributes: btree(vec![
                (
                    "id",
                    Attribute::new("", "id", AttributeType::String, Mode::Computed),
                ),
                ("metadata", metadata_attribute(Mode::Optional)),
                ("spec", spec_attribute::<Model>(false)),
            ]),
        }
    }

    fn summaries(diagnostics: &Diagnostics) -> Vec<(String, String)> {
        diagnostics
            .iter()
            .map(|diagnostic| {
                (
                    diagnostic.summary.clone(),
                    diagnostic.attribute.clone().unwrap_or_default(),
                )
            })
            .collect()
    }

    #[test]
    fn valid_config_has_no_diagnostics() {
        let diagnostics = manifest_like_schema().validate(&json!({
            "metadata": { "name": "xgboost", "namespace": "ml", "labels": { "app": "xgboost" } },
            "spec": {
                "model_name": "xgboost",
                "containers": [{ "image": "xgboost:1", "environment": { "A": "b" } }]
            }
        }));
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    }

    #[test]
    fn missing_and_unsupported_arguments() {
        let diagnostics = manifest_like_schema().validate(&json!({
            "metadata": { "name": "xgboost" },
            "spec": { "modelName": "xgboost" }
        }));
        assert_eq!(
            summaries(&diagnostics),
            vec![
                (
                    "Missing required argument".to_string(),
                    "metadata.namespace".to_string()
                ),
                (
                    "Unsupported argument".to_string(),
                    "spec.modelName".to_string()
                ),
                (
                    "Missing required argument".to_string(),
                    "spec.model_name".to_string()
                ),
            ]
        );
    }

    #[test]
    fn read_only_attributes_and_wrong_types() {
        let diagnostics = manifest_like_schema().validate(&json!({
            "id": "ml/xgboost",
            "metadata": { "name": "xgboost", "namespace": "ml", "labels": { "app": 1 } },
            "spec": {
                "model_name": "xgboost",
                "enable_network_isolation": "yes",
                "containers": [{ "image": 7 }]
            }
        }));
        assert_eq!(
            summaries(&diagnostics),
            vec![
                (
                    "Invalid Configuration for Read-Only Attribute".to_string(),
                    "id".to_string()
                ),
                (
                    "Incorrect attribute value type".to_string(),
                    r#"metadata.labels["app"]"#.to_string()
                ),
                (
                    "Incorrect attribute value type".to_string(),
                    "spec.containers[0].image".to_string()
                ),
                (
                    "Incorrect attribute value type".to_string(),
                    "spec.enable_network_isolation".to_string()
                ),
            ]
        );
        let detail = &diagnostics.iter().nth(3).unwrap().detail;
        assert_eq!(
            detail,
            "Inappropriate value for attribute \"enable_network_isolation\": bool required."
        );
    }

    #[test]
    fn validators_run_on_metadata() {
        let diagnostics = manifest_like_schema().validate(&json!({
            "metadata": { "name": "Not_Valid", "namespace": "ml" },
            "spec": { "model_name": "xgboost" }
        }));
        assert_eq!(
            summaries(&diagnostics),
            vec![(
                "Invalid Attribute Value".to_string(),
                "metadata.name".to_string()
            )]
        );
    }
}
