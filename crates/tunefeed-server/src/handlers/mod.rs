//! HTTP handlers

pub mod albums;
pub mod health;
pub mod tweets;

pub use health::health;
