//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use tunefeed_types::Tweet;

/// Tweet store
///
/// Rows are keyed by `(timeline, id)`. Empty results are not errors: a missing
/// timeline is `Ok(None)` and an empty table is `Ok(vec![])`.
#[async_trait]
pub trait TweetStore: Send + Sync {
    /// Persist one tweet at the configured write consistency
    async fn insert(&self, tweet: &Tweet) -> Result<()>;

    /// Every tweet across all timelines, in storage order
    async fn list_all(&self) -> Result<Vec<Tweet>>;

    /// At most one tweet from the given timeline, read at the configured read
    /// consistency
    async fn find_by_timeline(&self, timeline: &str) -> Result<Option<Tweet>>;

    /// Short backend name reported by the health endpoint
    fn backend(&self) -> &'static str;
}
