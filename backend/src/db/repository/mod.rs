//! Repository trait definitions for video record storage.
//!
//! - [`error`]: Error types for repository operations
//!
//! Implementations live in [`crate::db::repositories`]; handlers hold them as
//! `Arc<dyn VideoRepository>`.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{VideoId, VideoRecord};

/// Storage for processed video records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if it is unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert or replace a record.
    ///
    /// Records without an id are assigned a fresh one; the stored record is
    /// returned with its id set.
    async fn store_video(&self, record: VideoRecord) -> RepositoryResult<VideoRecord>;

    /// Retrieve one record.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    async fn get_video(&self, video_id: &VideoId) -> RepositoryResult<VideoRecord>;

    /// All records, most recently uploaded first.
    async fn list_videos(&self) -> RepositoryResult<Vec<VideoRecord>>;

    /// Remove a record and return it.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    async fn delete_video(&self, video_id: &VideoId) -> RepositoryResult<VideoRecord>;
}
