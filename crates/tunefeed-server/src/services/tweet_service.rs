//! Tweet service

use std::sync::Arc;
use tracing::{debug, info};
use tunefeed_core::ids::new_tweet_id;
use tunefeed_core::ports::TweetStore;
use tunefeed_core::{NewTweet, Result, Tweet, TunefeedError};

pub struct TweetService {
    store: Arc<dyn TweetStore>,
}

impl TweetService {
    pub fn new(store: Arc<dyn TweetStore>) -> Self {
        Self { store }
    }

    /// Assign a fresh time-based id and persist the tweet
    pub async fn create(&self, new_tweet: NewTweet) -> Result<Tweet> {
        if new_tweet.timeline.is_empty() {
            return Err(TunefeedError::InvalidInput(
                "timeline must not be empty".to_string(),
            ));
        }

        let tweet = new_tweet.into_tweet(new_tweet_id());
        info!("Creating tweet: id={}, timeline={}", tweet.id, tweet.timeline);

        self.store.insert(&tweet).await?;
        Ok(tweet)
    }

    pub async fn list_all(&self) -> Result<Vec<Tweet>> {
        let tweets = self.store.list_all().await?;
        debug!("Listed {} tweets", tweets.len());
        Ok(tweets)
    }

    pub async fn get_by_timeline(&self, timeline: &str) -> Result<Option<Tweet>> {
        let tweet = self.store.find_by_timeline(timeline).await?;
        debug!("Timeline {} lookup: found={}", timeline, tweet.is_some());
        Ok(tweet)
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTweetStore;
    use std::collections::HashSet;

    fn service() -> TweetService {
        TweetService::new(Arc::new(MemoryTweetStore::new()))
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let service = service();

        let mut ids = HashSet::new();
        for i in 0..20 {
            let tweet = service
                .create(NewTweet::new("me", format!("tweet {}", i)))
                .await
                .unwrap();
            assert_eq!(tweet.timeline, "me");
            assert_eq!(tweet.text, format!("tweet {}", i));
            assert!(!tweet.id.is_empty());
            ids.insert(tweet.id);
        }
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_list_contains_created() {
        let service = service();
        let a = service.create(NewTweet::new("me", "one")).await.unwrap();
        let b = service.create(NewTweet::new("you", "two")).await.unwrap();

        let all = service.list_all().await.unwrap();
        assert!(all.len() >= 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }

    #[tokio::test]
    async fn test_empty_timeline_rejected() {
        let err = service()
            .create(NewTweet::new("", "orphan"))
            .await
            .unwrap_err();
        assert!(matches!(err, TunefeedError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unknown_timeline_is_none() {
        let service = service();
        assert_eq!(service.get_by_timeline("ghost").await.unwrap(), None);
    }
}
