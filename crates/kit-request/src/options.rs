//! Request configuration and functional options.

use reqwest::blocking::Client;

/// Configuration gathered before a [`Request`](crate::Request) is built.
#[derive(Default)]
pub struct RequestOptions {
    /// Base URL resolved against by relative paths.
    pub base_url: Option<String>,
    /// Replacement for the stock HTTP client.
    pub client: Option<Client>,
}

/// Configuration mutator applied in order at construction time.
pub type RequestOption = Box<dyn FnOnce(&mut RequestOptions)>;

/// Override the default base URL.
pub fn with_base_url(base_url: impl Into<String>) -> RequestOption {
    let base_url = base_url.into();
    Box::new(move |o| o.base_url = Some(base_url))
}

/// Swap in a caller-configured client with its own transport settings.
pub fn with_client(client: Client) -> RequestOption {
    Box::new(move |o| o.client = Some(client))
}
