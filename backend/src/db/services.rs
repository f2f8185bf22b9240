//! High-level database service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. These functions
//! hold the validation and logging that should be consistent regardless of
//! the storage backend.
//!
//! # Usage
//!
//! ```no_run
//! use video_analytics::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let videos = services::list_videos(&repo).await?;
//!     println!("Found {} videos", videos.len());
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::{ErrorContext, RepositoryError, RepositoryResult, VideoRepository};
use crate::api::{VideoId, VideoRecord};

/// Check repository connectivity.
pub async fn health_check<R: VideoRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Validate and store a video record.
pub async fn store_video<R: VideoRepository + ?Sized>(
    repo: &R,
    record: VideoRecord,
) -> RepositoryResult<VideoRecord> {
    if record.video_name.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "video_name must not be empty",
            ErrorContext::new("store_video").with_entity("video"),
        ));
    }

    info!(
        "Service layer: storing video '{}' ({} samples, status {})",
        record.video_name,
        record.details.counts_per_second.len(),
        record.status
    );

    if let Some(max_second) = record.details.counts_per_second.iter().map(|s| s.second).max() {
        let reported = record.details.duration_seconds.unwrap_or(0.0);
        if (max_second as f64) > reported.ceil() {
            warn!(
                "Service layer: video '{}' has samples up to second {} beyond reported duration {}",
                record.video_name, max_second, reported
            );
        }
    }

    repo.store_video(record).await
}

/// Load one video record.
pub async fn get_video<R: VideoRepository + ?Sized>(
    repo: &R,
    video_id: &VideoId,
) -> RepositoryResult<VideoRecord> {
    info!("Service layer: loading video {}", video_id);
    repo.get_video(video_id).await
}

/// List all video records, newest first.
pub async fn list_videos<R: VideoRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<VideoRecord>> {
    info!("Service layer: listing all videos");
    repo.list_videos().await
}

/// Delete a video record.
pub async fn delete_video<R: VideoRepository + ?Sized>(
    repo: &R,
    video_id: &VideoId,
) -> RepositoryResult<VideoRecord> {
    info!("Service layer: deleting video {}", video_id);
    repo.delete_video(video_id)
        .await
        .map_err(|e| e.with_operation("delete_video"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CountSample;
    use crate::db::repositories::LocalRepository;

    #[tokio::test]
    async fn test_store_rejects_blank_name() {
        let repo = LocalRepository::new();
        let err = store_video(&repo, VideoRecord::new("  ")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(repo.video_count(), 0);
    }

    #[tokio::test]
    async fn test_store_and_get() {
        let repo = LocalRepository::new();
        let mut record = VideoRecord::new("cam1.mp4");
        record.details.counts_per_second = vec![CountSample::new(40, 2)];
        record.details.duration_seconds = Some(10.0);

        let stored = store_video(&repo, record).await.unwrap();
        let id = stored.id.clone().unwrap();
        let loaded = get_video(&repo, &id).await.unwrap();
        assert_eq!(loaded.video_name, "cam1.mp4");
    }

    #[tokio::test]
    async fn test_delete_missing_sets_operation() {
        let repo = LocalRepository::new();
        let err = delete_video(&repo, &VideoId::new("x")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.context().operation.as_deref(), Some("delete_video"));
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let repo: std::sync::Arc<dyn VideoRepository> = std::sync::Arc::new(LocalRepository::new());
        store_video(repo.as_ref(), VideoRecord::new("dyn.mp4")).await.unwrap();
        assert_eq!(list_videos(repo.as_ref()).await.unwrap().len(), 1);
        assert!(health_check(repo.as_ref()).await.unwrap());
    }
}
