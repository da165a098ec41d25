use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Error converting '{}' to JSON: {}", what, source))]
    JsonSerialization {
        what: String,
        source: serde_json::Error,
    },

    #[snafu(display("Error writing '{}' as YAML: {}", what, source))]
    YamlSerialization {
        what: String,
        source: serde_yaml::Error,
    },

    #[snafu(display("Error reading YAML manifest: {}", source))]
    YamlDeserialization { source: serde_yaml::Error },
}
