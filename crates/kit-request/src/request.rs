//! Blocking GET/POST helper over a configurable base URL.

use std::collections::HashMap;

use reqwest::blocking::{Body, Client, Response};
use tracing::debug;
use url::Url;

use crate::error::RequestError;
use crate::options::{RequestOption, RequestOptions};

/// Base URL used when no `with_base_url` option is supplied.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Reusable request context: base URL, header set, underlying client.
pub struct Request {
    base_url: Url,
    headers: HashMap<String, String>,
    client: Client,
}

impl Request {
    /// Build a request context from the supplied options.
    pub fn new(opts: impl IntoIterator<Item = RequestOption>) -> Result<Self, RequestError> {
        let mut options = RequestOptions::default();
        for opt in opts {
            opt(&mut options);
        }

        let base_url = Url::parse(options.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        Ok(Self {
            base_url,
            headers: HashMap::new(),
            client: options.client.unwrap_or_default(),
        })
    }

    /// Replace the header set used by subsequent calls.
    ///
    /// Headers from any earlier `header` call are discarded, not merged.
    pub fn header(&mut self, headers: HashMap<String, String>) -> &mut Self {
        self.headers = headers;
        self
    }

    /// Issue a blocking GET with `query` pairs encoded into the URL.
    ///
    /// `path` is resolved against the base URL unless it carries an http
    /// scheme prefix, in which case it is used as the full target and the
    /// base URL is ignored.
    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, RequestError> {
        let url = self.resolve(path)?;
        debug!(%url, "GET");
        let mut req = self.client.get(url);
        if !query.is_empty() {
            req = req.query(query);
        }
        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        Ok(req.send()?)
    }

    /// Issue a blocking POST with `body`, resolving `path` like [`get`](Self::get).
    pub fn post(&self, path: &str, body: impl Into<Body>) -> Result<Response, RequestError> {
        let url = self.resolve(path)?;
        debug!(%url, "POST");
        let mut req = self.client.post(url).body(body);
        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        Ok(req.send()?)
    }

    fn resolve(&self, path: &str) -> Result<Url, RequestError> {
        if path.starts_with("http") {
            return Ok(Url::parse(path)?);
        }
        let mut url = self.base_url.clone();
        url.set_path(path);
        Ok(url)
    }
}
