//! Business logic services

pub mod album_catalog;
pub mod tweet_service;

pub use album_catalog::AlbumCatalog;
pub use tweet_service::TweetService;
