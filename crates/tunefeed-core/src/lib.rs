//! Tunefeed Core Library
//!
//! Domain errors, tweet id generation, consistency levels and the storage
//! port implemented by the server's adapters.

// Re-export pure types from tunefeed-types
pub use tunefeed_types::*;

pub mod consistency;
pub mod error;
pub mod ids;
pub mod ports;

pub use consistency::Consistency;
pub use error::{Result, TunefeedError};
