//! In-memory cache backend.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::backend::Cache;
use crate::error::CacheError;
use crate::options::CacheOption;

/// Unbounded process-local cache guarded by a single read-write lock.
///
/// Readers proceed concurrently; `set` and `delete` serialize against
/// readers and each other. No persistence, no eviction.
pub struct MemoryCache {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    /// Create an empty memory cache.
    ///
    /// The memory backend has no configuration; options are accepted for
    /// factory parity and ignored.
    pub fn new(_opts: impl IntoIterator<Item = CacheOption>) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new([])
    }
}

impl Cache for MemoryCache {
    fn init(&mut self, _opts: Vec<CacheOption>) -> Result<(), CacheError> {
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String, CacheError> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotFound { key: key.to_owned() })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn get_on_missing_key_is_not_found() {
        let cache = MemoryCache::new([]);
        assert!(matches!(
            cache.get("absent"),
            Err(CacheError::NotFound { key }) if key == "absent"
        ));
    }

    #[test]
    fn set_then_get_round_trips() {
        let cache = MemoryCache::new([]);
        cache.set("name", "value").expect("set failed");
        assert_eq!(cache.get("name").expect("get failed"), "value");
    }

    #[test]
    fn second_set_overwrites() {
        let cache = MemoryCache::new([]);
        cache.set("name", "first").expect("set failed");
        cache.set("name", "second").expect("set failed");
        assert_eq!(cache.get("name").expect("get failed"), "second");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let cache = MemoryCache::new([]);
        cache.set("name", "value").expect("set failed");
        cache.delete("name").expect("delete failed");
        assert!(matches!(
            cache.get("name"),
            Err(CacheError::NotFound { .. })
        ));
    }

    #[test]
    fn delete_on_absent_key_is_ok() {
        let cache = MemoryCache::new([]);
        assert!(cache.delete("never-set").is_ok());
    }

    #[test]
    fn concurrent_sets_on_distinct_keys_keep_all_updates() {
        let cache = Arc::new(MemoryCache::new([]));
        let mut handles = Vec::new();
        for writer in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for n in 0..100 {
                    let key = format!("writer{writer}-{n}");
                    cache.set(&key, "v").expect("set failed");
                }
            }));
        }
        for handle in handles {
            handle.join().expect("writer thread panicked");
        }
        for writer in 0..8 {
            for n in 0..100 {
                let key = format!("writer{writer}-{n}");
                assert_eq!(cache.get(&key).expect("get failed"), "v");
            }
        }
    }

    #[test]
    fn set_get_delete_end_to_end() {
        let cache = MemoryCache::new([]);
        assert_eq!(cache.name(), "memory");
        cache.set("name", "value").expect("set failed");
        assert_eq!(cache.get("name").expect("get failed"), "value");
        cache.delete("name").expect("delete failed");
        assert!(matches!(
            cache.get("name"),
            Err(CacheError::NotFound { .. })
        ));
    }
}
