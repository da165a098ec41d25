/*!

This library provides models of the ACK SageMaker custom resources and a client for reading them
from a cluster.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use crd_ext::CrdExt;
pub use error::{Error, Result};
pub use sagemaker::SageMakerResource;

pub mod clients;
pub mod constants;
mod crd_ext;
mod error;
pub mod sagemaker;
