//! Tunefeed Types - Pure type definitions
//!
//! This crate contains only serde data types shared by the core library and
//! the HTTP server. It has no async runtime or storage dependencies.

pub mod album;
pub mod tweet;

pub use album::*;
pub use tweet::*;

use serde::{Deserialize, Serialize};

/// JSON body used for every error and not-found response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
