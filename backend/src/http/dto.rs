//! Data Transfer Objects for the HTTP API.
//!
//! Most response DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Records
    CountSample, VideoDetails, VideoId, VideoRecord, VideoStatus,
    // Listing
    VideoListData, VideoSummary,
    // Timeline
    Granularity, TimelinePoint, TimelineRequest, VideoTimeline,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub database: String,
}
