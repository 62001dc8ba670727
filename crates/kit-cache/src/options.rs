//! Cache configuration and functional options.

/// Configuration shared by all cache backends.
#[derive(Debug, Clone, Default)]
pub struct CacheOptions {
    /// Backend node addresses as `host:port` strings.
    pub nodes: Vec<String>,
}

/// Configuration mutator applied in order at construction time.
pub type CacheOption = Box<dyn FnOnce(&mut CacheOptions)>;

/// Set the backend nodes to connect to.
pub fn with_nodes<I, S>(nodes: I) -> CacheOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let nodes: Vec<String> = nodes.into_iter().map(Into::into).collect();
    Box::new(move |o| o.nodes = nodes)
}

impl CacheOptions {
    /// Apply mutators in order; later mutators win.
    pub(crate) fn apply(&mut self, opts: impl IntoIterator<Item = CacheOption>) {
        for opt in opts {
            opt(self);
        }
    }
}
