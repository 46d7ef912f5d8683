//! In-memory album catalog

use tokio::sync::RwLock;
use tracing::info;
use tunefeed_core::{seed_albums, Album};

/// Ordered, append-only album list shared by all requests
pub struct AlbumCatalog {
    albums: RwLock<Vec<Album>>,
}

impl AlbumCatalog {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Catalog holding the three seed albums
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }

    /// All albums in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// First album with a matching id
    pub async fn get_by_id(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .await
            .iter()
            .find(|album| album.id == id)
            .cloned()
    }

    /// Append an album. Duplicate ids are kept; lookups return the first.
    pub async fn create(&self, album: Album) -> Album {
        info!("Adding album: id={}, title={}", album.id, album.title);
        self.albums.write().await.push(album.clone());
        album
    }

    pub(crate) async fn len(&self) -> usize {
        self.albums.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_list_order() {
        let catalog = AlbumCatalog::seeded();
        let albums = catalog.list().await;

        assert_eq!(albums, seed_albums());
        assert_eq!(albums[0].title, "Blue Train");
        assert_eq!(albums[2].artist, "Sarah Vaughan");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let catalog = AlbumCatalog::seeded();
        let album = Album::new("4", "Giant Steps", "John Coltrane", 24.99);

        assert_eq!(catalog.create(album.clone()).await, album);
        assert_eq!(catalog.get_by_id("4").await, Some(album.clone()));
        assert_eq!(catalog.list().await.last(), Some(&album));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let catalog = AlbumCatalog::seeded();
        assert_eq!(catalog.get_by_id("404").await, None);
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_first() {
        let catalog = AlbumCatalog::seeded();
        catalog
            .create(Album::new("1", "Impostor", "Nobody", 1.0))
            .await;

        assert_eq!(catalog.len().await, 4);
        let found = catalog.get_by_id("1").await.unwrap();
        assert_eq!(found.title, "Blue Train");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_are_all_kept() {
        let catalog = Arc::new(AlbumCatalog::seeded());

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let catalog = catalog.clone();
                tokio::spawn(async move {
                    let album = Album::new(format!("c-{}", i), format!("Take {}", i), "Band", 9.99);
                    catalog.create(album).await
                })
            })
            .collect();

        for result in futures::future::join_all(handles).await {
            result.unwrap();
        }

        assert_eq!(catalog.len().await, 103);
        for i in 0..100 {
            let id = format!("c-{}", i);
            let album = catalog.get_by_id(&id).await.unwrap();
            assert_eq!(album.title, format!("Take {}", i));
        }
    }
}
