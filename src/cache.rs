//! In-memory episode cache.
//!
//! Episode lists are memoized per show for the lifetime of the process.
//! Entries are never invalidated or evicted. Two lookups of the same
//! uncached show that race will both fetch; the controller awaits one
//! operation at a time, so that only happens if a caller drives it from
//! several tasks.

use crate::types::{Episode, ShowId};
use log::debug;
use std::collections::HashMap;

/// Show id to episode list memo.
#[derive(Debug, Default)]
pub struct EpisodeCache {
    entries: HashMap<ShowId, Vec<Episode>>,
}

impl EpisodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached episodes for `show_id`, if that show was fetched before.
    pub fn get(&self, show_id: ShowId) -> Option<&[Episode]> {
        self.entries.get(&show_id).map(Vec::as_slice)
    }

    /// Store the episodes fetched for `show_id`.
    pub fn put(&mut self, show_id: ShowId, episodes: Vec<Episode>) {
        debug!("Caching {} episodes for show {}", episodes.len(), show_id);
        self.entries.insert(show_id, episodes);
    }

    pub fn contains(&self, show_id: ShowId) -> bool {
        self.entries.contains_key(&show_id)
    }

    /// Number of shows with cached episodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: u64) -> Episode {
        Episode {
            id,
            season: 1,
            number: Some(id as u32),
            name: format!("Episode {}", id),
            summary: None,
            image: None,
        }
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = EpisodeCache::new();
        assert!(cache.get(82).is_none());
        assert!(cache.is_empty());

        cache.put(82, vec![episode(1), episode(2)]);
        let cached = cache.get(82).unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, 1);
        assert!(cache.contains(82));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entries_are_per_show() {
        let mut cache = EpisodeCache::new();
        cache.put(1, vec![episode(10)]);
        cache.put(2, vec![episode(20), episode(21)]);

        assert_eq!(cache.get(1).unwrap().len(), 1);
        assert_eq!(cache.get(2).unwrap().len(), 2);
        assert!(!cache.contains(3));
    }

    #[test]
    fn test_empty_episode_list_is_cached() {
        let mut cache = EpisodeCache::new();
        cache.put(7, Vec::new());
        assert!(cache.contains(7));
        assert_eq!(cache.get(7).map(|eps| eps.len()), Some(0));
    }
}
