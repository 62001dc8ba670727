//! Redis-cluster cache backend.

use std::process;
use std::time::Duration;

use r2d2::Pool;
use redis::Commands;
use redis::cluster::{ClusterClient, ClusterClientBuilder};
use tracing::{debug, error};

use crate::backend::Cache;
use crate::error::CacheError;
use crate::options::{CacheOption, CacheOptions};

/// Seed nodes used when no `with_nodes` option is supplied.
const DEFAULT_NODES: [&str; 3] = ["127.0.0.1:6379", "127.0.0.1:6380", "127.0.0.1:6381"];

/// Timeout for dialing a cluster node.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const POOL_MAX_ACTIVE: u32 = 10;
const POOL_MAX_IDLE: u32 = 5;
const POOL_IDLE_TIMEOUT: Duration = Duration::from_millis(100);

/// Cache backed by a Redis cluster behind a bounded connection pool.
///
/// Each operation borrows one pooled connection, issues a single command
/// and returns the connection when it drops. Values pass through as
/// strings. Pooled connections are liveness-checked on checkout; callers
/// beyond the pool bound block until a connection frees up.
pub struct ClusterCache {
    options: CacheOptions,
    pool: Pool<ClusterClient>,
}

impl ClusterCache {
    /// Connect to the cluster described by `opts`.
    ///
    /// Building the pool establishes the initial connections and refreshes
    /// the cluster topology. Failure here logs and terminates the process:
    /// a cache layer with no reachable cluster is non-startable.
    pub fn new(opts: impl IntoIterator<Item = CacheOption>) -> Self {
        let mut options = CacheOptions {
            nodes: DEFAULT_NODES.iter().map(|n| n.to_string()).collect(),
        };
        options.apply(opts);

        let urls: Vec<String> = options
            .nodes
            .iter()
            .map(|node| format!("redis://{node}"))
            .collect();

        let client = match ClusterClientBuilder::new(urls)
            .connection_timeout(CONNECT_TIMEOUT)
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                error!(error = %err, nodes = ?options.nodes, "invalid cluster configuration");
                process::exit(1);
            }
        };

        let pool = match Pool::builder()
            .max_size(POOL_MAX_ACTIVE)
            .min_idle(Some(POOL_MAX_IDLE))
            .idle_timeout(Some(POOL_IDLE_TIMEOUT))
            .test_on_check_out(true)
            .build(client)
        {
            Ok(pool) => pool,
            Err(err) => {
                error!(error = %err, nodes = ?options.nodes, "redis cluster unreachable");
                process::exit(1);
            }
        };

        debug!(nodes = ?options.nodes, "redis cluster cache ready");
        Self { options, pool }
    }

    /// Current node configuration.
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }
}

impl Cache for ClusterCache {
    fn init(&mut self, opts: Vec<CacheOption>) -> Result<(), CacheError> {
        self.options.apply(opts);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String, CacheError> {
        let mut conn = self.pool.get()?;
        let value: Option<String> = conn.get(key)?;
        value.ok_or_else(|| CacheError::Nil { key: key.to_owned() })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut conn = self.pool.get()?;
        let _: () = conn.set(key, value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.pool.get()?;
        let _: () = conn.del(key)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
