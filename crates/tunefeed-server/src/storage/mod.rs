//! Storage layer
//!
//! Tweets live in Cassandra (CQL) in production. The DashMap-backed store
//! serves local development and tests.

pub mod cql;
pub mod memory;

pub use cql::CqlTweetStore;
pub use memory::MemoryTweetStore;

use crate::config::{AppConfig, StorageBackend};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use tunefeed_core::ports::TweetStore;

/// Open the configured tweet store. Failure here is fatal to startup.
pub async fn open_tweet_store(config: &AppConfig) -> Result<Arc<dyn TweetStore>> {
    match config.storage.backend {
        StorageBackend::Cassandra => {
            let store = CqlTweetStore::connect(&config.cassandra).await?;
            info!("Tweet store ready (cassandra)");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory tweet store; tweets are lost on restart");
            Ok(Arc::new(MemoryTweetStore::new()))
        }
    }
}
