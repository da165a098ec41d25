mod crd_client;
mod error;
mod http_status_code;

pub use crd_client::{CrdClient, CrdReader};
pub use error::{Error, Result};
pub use http_status_code::{HttpStatusCode, StatusCode};
