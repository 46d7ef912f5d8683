//! In-memory tweet store using DashMap (stands in for Cassandra locally)

use async_trait::async_trait;
use dashmap::DashMap;
use tunefeed_core::ports::TweetStore;
use tunefeed_core::{Result, Tweet};

/// Process-local tweet store
///
/// Tweets are grouped by timeline and kept in insertion order within each
/// timeline, so `find_by_timeline` returns the oldest tweet, as the first
/// clustering row of a Cassandra partition would be.
pub struct MemoryTweetStore {
    timelines: DashMap<String, Vec<Tweet>>,
}

impl MemoryTweetStore {
    pub fn new() -> Self {
        Self {
            timelines: DashMap::new(),
        }
    }
}

#[async_trait]
impl TweetStore for MemoryTweetStore {
    async fn insert(&self, tweet: &Tweet) -> Result<()> {
        self.timelines
            .entry(tweet.timeline.clone())
            .or_default()
            .push(tweet.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Tweet>> {
        Ok(self
            .timelines
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_timeline(&self, timeline: &str) -> Result<Option<Tweet>> {
        Ok(self
            .timelines
            .get(timeline)
            .and_then(|tweets| tweets.first().cloned()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn tweet(id: &str, timeline: &str, text: &str) -> Tweet {
        Tweet {
            id: id.to_string(),
            timeline: timeline.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_basic_operations() {
        let store = MemoryTweetStore::new();

        assert_ok!(store.insert(&tweet("a", "me", "first")).await);
        assert_ok!(store.insert(&tweet("b", "you", "second")).await);
        assert_eq!(store.list_all().await.unwrap().len(), 2);

        let found = store.find_by_timeline("you").await.unwrap();
        assert_eq!(found, Some(tweet("b", "you", "second")));
    }

    #[tokio::test]
    async fn test_missing_timeline_is_none() {
        let store = MemoryTweetStore::new();
        assert_eq!(store.find_by_timeline("nobody").await.unwrap(), None);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeline_returns_oldest() {
        let store = MemoryTweetStore::new();
        store.insert(&tweet("a", "me", "first")).await.unwrap();
        store.insert(&tweet("b", "me", "second")).await.unwrap();

        let found = store.find_by_timeline("me").await.unwrap().unwrap();
        assert_eq!(found.id, "a");
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
