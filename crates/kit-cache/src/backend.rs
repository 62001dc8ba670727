//! Cache contract implemented by every backend.

use crate::error::CacheError;
use crate::options::CacheOption;

/// A key-value store with pluggable backends.
///
/// Every backend holds at most one value per key; `set` overwrites
/// unconditionally and the last write wins. A missing key is an error,
/// never a silent default.
pub trait Cache: Send + Sync {
    /// Apply configuration mutators to the backend.
    fn init(&mut self, opts: Vec<CacheOption>) -> Result<(), CacheError>;

    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Result<String, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is a no-op success.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Short name of the concrete backend.
    fn name(&self) -> &'static str;
}
