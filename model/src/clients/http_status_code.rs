pub use http::StatusCode;
use kube::Error;

/// Exposes the HTTP status code behind an error, if the error came from a response of the
/// Kubernetes API server.
pub trait HttpStatusCode {
    fn status_code(&self) -> Option<StatusCode>;

    fn is_status_code(&self, status_code: StatusCode) -> bool {
        self.status_code()
            .map(|some| some == status_code)
            .unwrap_or_default()
    }

    /// The API server answered `404 Not Found`, i.e. the object does not exist or the caller is
    /// not allowed to know that it does.
    fn is_not_found(&self) -> bool {
        self.is_status_code(StatusCode::NOT_FOUND)
    }
}

impl HttpStatusCode for kube::Error {
    fn status_code(&self) -> Option<StatusCode> {
        if let Error::Api(error_response) = self {
            StatusCode::from_u16(error_response.code).ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use kube::core::ErrorResponse;

    fn api_error(code: u16) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "no".to_string(),
            reason: "Testing".to_string(),
            code,
        })
    }

    #[test]
    fn api_errors_carry_their_status() {
        assert!(api_error(404).is_not_found());
        assert!(!api_error(403).is_not_found());
        assert_eq!(api_error(500).status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
