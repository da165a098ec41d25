use crate::error::{self, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use snafu::ResultExt;

/// Provides some conveniences for querying and rendering a `kube-rs` object.
pub trait CrdExt: Serialize + DeserializeOwned {
    /// Returns this objects `ObjectMeta` information (i.e. the `metadata` field). You implement
    /// this be returning `&self.metadata`. This allows the rest of this trait's functions to be
    /// implemented for you.
    fn object_meta(&self) -> &ObjectMeta;

    /// Returns the object.metadata.name field, unwrapping a potential `None` with `""`. This is
    /// named `object_name` to avoid confusion with `ResourceExt`.
    fn object_name(&self) -> &str {
        self.object_meta().name.as_deref().unwrap_or("")
    }

    /// Returns the object.metadata.namespace field, unwrapping a potential `None` with `""`.
    fn object_namespace(&self) -> &str {
        self.object_meta().namespace.as_deref().unwrap_or("")
    }

    /// Returns this object's YAML representation as a String. Fields that are not set are left
    /// out of the document instead of being written as `null`.
    fn to_yaml(&self) -> Result<String> {
        let mut value = serde_json::to_value(self).context(error::JsonSerializationSnafu {
            what: self.object_name(),
        })?;
        prune_nulls(&mut value);
        Ok(
            serde_yaml::to_string(&value).context(error::YamlSerializationSnafu {
                what: self.object_name(),
            })?,
        )
    }

    /// Parses a YAML manifest, e.g. one produced by `to_yaml`.
    fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml).context(error::YamlDeserializationSnafu)?)
    }
}

/// Recursively removes `null` entries from JSON objects. Nulls inside arrays are kept so that
/// element positions do not shift.
pub(crate) fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod test {
    use super::prune_nulls;
    use serde_json::json;

    #[test]
    fn nulls_are_pruned_at_every_depth() {
        let mut value = json!({
            "a": null,
            "b": { "c": null, "d": 1 },
            "e": [ { "f": null, "g": "x" }, null ]
        });
        prune_nulls(&mut value);
        assert_eq!(
            value,
            json!({
                "b": { "d": 1 },
                "e": [ { "g": "x" }, null ]
            })
        );
    }
}
