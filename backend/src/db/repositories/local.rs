//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`VideoRepository`]
//! suitable for unit testing and local development. All records are kept in a
//! `HashMap` behind a lock, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::api::{VideoId, VideoRecord};
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use video_analytics::api::VideoRecord;
/// use video_analytics::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// let id = repo.store_video_impl(VideoRecord::new("lobby.mp4"));
/// assert!(repo.has_video(&id));
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    videos: HashMap<VideoId, VideoRecord>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            videos: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository preloaded with the records of a JSON seed file.
    ///
    /// The file must hold a JSON array of video records.
    pub fn from_seed_file(path: &Path) -> RepositoryResult<Self> {
        let context = || {
            ErrorContext::new("load_seed_file").with_details(path.display().to_string())
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read seed file: {}", e),
                context(),
            )
        })?;
        let records: Vec<VideoRecord> = serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Invalid seed file: {}", e),
                context(),
            )
        })?;

        let repo = Self::new();
        for record in records {
            repo.store_video_impl(record);
        }
        Ok(repo)
    }

    /// Insert a record synchronously, assigning an id when it has none.
    ///
    /// # Returns
    /// The id under which the record was stored
    pub fn store_video_impl(&self, mut record: VideoRecord) -> VideoId {
        let video_id = match record.id.take() {
            Some(id) if !id.is_empty() => id,
            _ => VideoId::generate(),
        };
        record.id = Some(video_id.clone());
        self.data.write().videos.insert(video_id.clone(), record);
        video_id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        self.data.write().videos.clear();
    }

    /// Get the number of videos stored.
    pub fn video_count(&self) -> usize {
        self.data.read().videos.len()
    }

    /// Check if a video exists.
    pub fn has_video(&self, video_id: &VideoId) -> bool {
        self.data.read().videos.contains_key(video_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Repository is not healthy"));
        }
        Ok(())
    }

    fn not_found(operation: &str, video_id: &VideoId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Video {} not found", video_id),
            ErrorContext::new(operation)
                .with_entity("video")
                .with_entity_id(video_id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_video(&self, record: VideoRecord) -> RepositoryResult<VideoRecord> {
        self.check_health()?;
        let video_id = self.store_video_impl(record);
        self.get_video(&video_id).await
    }

    async fn get_video(&self, video_id: &VideoId) -> RepositoryResult<VideoRecord> {
        self.check_health()?;
        self.data
            .read()
            .videos
            .get(video_id)
            .cloned()
            .ok_or_else(|| Self::not_found("get_video", video_id))
    }

    async fn list_videos(&self) -> RepositoryResult<Vec<VideoRecord>> {
        self.check_health()?;
        let mut videos: Vec<VideoRecord> = self.data.read().videos.values().cloned().collect();
        videos.sort_by(|a, b| {
            b.uploaded_at
                .cmp(&a.uploaded_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(videos)
    }

    async fn delete_video(&self, video_id: &VideoId) -> RepositoryResult<VideoRecord> {
        self.check_health()?;
        self.data
            .write()
            .videos
            .remove(video_id)
            .ok_or_else(|| Self::not_found("delete_video", video_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn record_at(name: &str, day: u32) -> VideoRecord {
        let mut record = VideoRecord::new(name);
        record.uploaded_at = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        record
    }

    #[tokio::test]
    async fn test_store_assigns_id() {
        let repo = LocalRepository::new();
        let stored = repo.store_video(VideoRecord::new("a.mp4")).await.unwrap();

        let id = stored.id.clone().unwrap();
        assert!(!id.is_empty());
        assert_eq!(repo.get_video(&id).await.unwrap(), stored);
    }

    #[tokio::test]
    async fn test_store_keeps_given_id_and_replaces() {
        let repo = LocalRepository::new();
        let mut record = VideoRecord::new("first.mp4");
        record.id = Some(VideoId::new("fixed"));
        repo.store_video(record.clone()).await.unwrap();

        record.video_name = "second.mp4".to_string();
        repo.store_video(record).await.unwrap();

        assert_eq!(repo.video_count(), 1);
        let stored = repo.get_video(&VideoId::new("fixed")).await.unwrap();
        assert_eq!(stored.video_name, "second.mp4");
    }

    #[tokio::test]
    async fn test_blank_id_is_replaced() {
        let repo = LocalRepository::new();
        let mut record = VideoRecord::new("blank.mp4");
        record.id = Some(VideoId::new(""));
        let id = repo.store_video_impl(record);
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.get_video(&VideoId::new("nope")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.context().entity_id.as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = LocalRepository::new();
        repo.store_video_impl(record_at("old.mp4", 1));
        repo.store_video_impl(record_at("new.mp4", 20));
        repo.store_video_impl(record_at("mid.mp4", 10));

        let names: Vec<String> = repo
            .list_videos()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.video_name)
            .collect();
        assert_eq!(names, vec!["new.mp4", "mid.mp4", "old.mp4"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = LocalRepository::new();
        let id = repo.store_video_impl(VideoRecord::new("gone.mp4"));

        let removed = repo.delete_video(&id).await.unwrap();
        assert_eq!(removed.video_name, "gone.mp4");
        assert!(!repo.has_video(&id));
        assert!(repo.delete_video(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_unhealthy_rejects_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo.list_videos().await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = LocalRepository::new();
        repo.store_video_impl(VideoRecord::new("x.mp4"));
        repo.clear();
        assert_eq!(repo.video_count(), 0);
    }

    #[test]
    fn test_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "s1", "video_name": "seed.mp4", "person_count": 2}},
               {{"video_name": "anon.mp4"}}]"#
        )
        .unwrap();

        let repo = LocalRepository::from_seed_file(file.path()).unwrap();
        assert_eq!(repo.video_count(), 2);
        assert!(repo.has_video(&VideoId::new("s1")));
    }

    #[test]
    fn test_from_seed_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = LocalRepository::from_seed_file(file.path()).err().unwrap();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_from_seed_file_missing() {
        let result = LocalRepository::from_seed_file(Path::new("/definitely/not/here.json"));
        assert!(result.is_err());
    }
}
