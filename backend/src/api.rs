//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::timeline::BucketPlan;
pub use crate::routes::timeline::BucketedPoint;
pub use crate::routes::timeline::Granularity;
pub use crate::routes::timeline::TimelinePoint;
pub use crate::routes::timeline::TimelineRequest;
pub use crate::routes::timeline::VideoTimeline;
pub use crate::routes::videos::VideoListData;
pub use crate::routes::videos::VideoSummary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video identifier (UUID string assigned on upload).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(value: impl Into<String>) -> Self {
        VideoId(value.into())
    }

    /// Fresh random identifier.
    pub fn generate() -> Self {
        VideoId(uuid::Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoId {
    fn from(value: &str) -> Self {
        VideoId::new(value)
    }
}

/// Processing status reported by the video pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Completed,
    Processing,
    #[default]
    Failed,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Completed => "completed",
            VideoStatus::Processing => "processing",
            VideoStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person count measured at one second of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountSample {
    pub second: u64,
    pub count: u64,
}

impl CountSample {
    pub fn new(second: u64, count: u64) -> Self {
        Self { second, count }
    }
}

/// Per-video analytics produced by the detection pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_frames: Option<u64>,
    /// Reported media duration; may be fractional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_count: Option<u64>,
    /// Sparse occupancy series, not guaranteed sorted or unique.
    #[serde(default)]
    pub counts_per_second: Vec<CountSample>,
}

/// A processed (or failed) video and its analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Assigned by the repository when missing.
    #[serde(default)]
    pub id: Option<VideoId>,
    pub video_name: String,
    #[serde(default = "Utc::now")]
    pub uploaded_at: DateTime<Utc>,
    /// Scalar total used when no time series exists.
    #[serde(default)]
    pub person_count: u64,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time_seconds: Option<f64>,
    #[serde(default)]
    pub details: VideoDetails,
}

impl VideoRecord {
    pub fn new(video_name: impl Into<String>) -> Self {
        Self {
            id: None,
            video_name: video_name.into(),
            uploaded_at: Utc::now(),
            person_count: 0,
            status: VideoStatus::Completed,
            processed_video: None,
            processing_time_seconds: None,
            details: VideoDetails::default(),
        }
    }

    /// Upload date as `YYYY-MM-DD`.
    pub fn upload_date(&self) -> String {
        self.uploaded_at.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
