//! Thin blocking HTTP helper with a configurable base URL.

pub mod error;
pub mod options;
pub mod request;

pub use error::RequestError;
pub use options::{RequestOption, RequestOptions, with_base_url, with_client};
pub use request::Request;
