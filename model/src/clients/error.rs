use crate::clients::{HttpStatusCode, StatusCode};
use snafu::Snafu;

/// The `Result` type returned by `clients`.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type returned by `clients`.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The private error type returned by `clients`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub(crate) enum InnerError {
    #[snafu(display("Error converting {} '{}' to JSON: {}", what, name, source))]
    Serde {
        what: String,
        name: String,
        source: serde_json::Error,
    },

    #[snafu(display("Unable to read {} '{}' from its JSON representation: {}", what, name, source))]
    Deserialize {
        what: String,
        name: String,
        source: serde_json::Error,
    },

    #[snafu(display("Error initializing the Kubernetes client: {}", source))]
    Initialization { source: kube::Error },

    #[snafu(display("Unable to {} {} '{}': {}", method, what, name, source))]
    KubeApiCall {
        method: String,
        what: String,
        name: String,
        source: kube::Error,
    },
}

impl Error {
    /// The object was returned by the API server but its JSON does not have the shape of the
    /// model.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.0, InnerError::Deserialize { .. })
    }
}

impl HttpStatusCode for InnerError {
    fn status_code(&self) -> Option<StatusCode> {
        match self {
            InnerError::Serde { .. }
            | InnerError::Deserialize { .. }
            | InnerError::Initialization { .. } => None,
            InnerError::KubeApiCall { source: e, .. } => e.status_code(),
        }
    }
}

impl HttpStatusCode for Error {
    fn status_code(&self) -> Option<StatusCode> {
        self.0.status_code()
    }
}
