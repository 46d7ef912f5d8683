//! Tweet types

use serde::{Deserialize, Serialize};

/// A tweet stored under a timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Time-based UUID, generated by the server on creation
    pub id: String,
    /// Partition key
    pub timeline: String,
    pub text: String,
}

/// Tweet creation request
///
/// Unknown fields (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTweet {
    pub timeline: String,
    pub text: String,
}

impl NewTweet {
    pub fn new(timeline: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timeline: timeline.into(),
            text: text.into(),
        }
    }

    /// Attach a generated id, producing the record to persist
    pub fn into_tweet(self, id: String) -> Tweet {
        Tweet {
            id,
            timeline: self.timeline,
            text: self.text,
        }
    }
}
