use dashmap::DashMap;
use lingo::domain::MemoKey;
use lingo::ports::TranslationMemo;

/// DashMap-based memo of finished translations
/// One flat map with a composite (user, destination, text) key; per-shard
/// locking makes single-key operations safe under concurrent handler tasks.
/// Entries are never evicted and live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: DashMap<MemoKey, String>,
}

impl MemoCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of memoized translations across all users
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationMemo for MemoCache {
    fn get(&self, key: &MemoKey) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: MemoKey, translation: String) {
        self.entries.insert(key, translation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_cache_put_and_get() {
        let cache = MemoCache::new();

        let key = MemoKey::new("u1", "es", "hello");
        cache.put(key.clone(), "hola".to_string());

        // Get the value
        let hit = cache.get(&key);
        assert_eq!(hit, Some("hola".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memo_cache_get_nonexistent() {
        let cache = MemoCache::new();

        // Try to get a key that doesn't exist
        let miss = cache.get(&MemoKey::new("u1", "es", "hello"));
        assert!(miss.is_none());
    }

    #[test]
    fn test_memo_cache_overwrite() {
        let cache = MemoCache::new();

        let key = MemoKey::new("u1", "es", "hello");

        // Put initial value
        cache.put(key.clone(), "hola".to_string());

        // Overwrite with new value
        cache.put(key.clone(), "buenas".to_string());

        // Get the value - should be the new one
        assert_eq!(cache.get(&key), Some("buenas".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_memo_cache_isolates_users() {
        let cache = MemoCache::new();

        cache.put(MemoKey::new("u1", "es", "hello"), "hola".to_string());

        // Same text and language for another user is a miss
        let miss = cache.get(&MemoKey::new("u2", "es", "hello"));
        assert!(miss.is_none());
    }

    #[test]
    fn test_memo_cache_isolates_languages() {
        let cache = MemoCache::new();

        cache.put(MemoKey::new("u1", "es", "hello"), "hola".to_string());

        // Same user and text for another destination is a miss
        let miss = cache.get(&MemoKey::new("u1", "fr", "hello"));
        assert!(miss.is_none());
    }
}
