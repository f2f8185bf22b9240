use serde::{Deserialize, Serialize};

use crate::api::{VideoId, VideoRecord, VideoStatus};
use crate::services::timeline::format_processing_time;

/// Row of the recent uploads table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: VideoId,
    pub video_name: String,
    pub upload_date: String,
    pub person_count: u64,
    pub status: VideoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_video: Option<String>,
    /// Human readable processing time, `"N/A"` when unknown.
    pub processing_time: String,
}

impl VideoSummary {
    /// Returns `None` for records that were never assigned an id.
    pub fn from_record(record: &VideoRecord) -> Option<Self> {
        let id = record.id.clone()?;
        Some(Self {
            id,
            video_name: record.video_name.clone(),
            upload_date: record.upload_date(),
            person_count: record.person_count,
            status: record.status,
            processed_video: record.processed_video.clone(),
            processing_time: format_processing_time(record.processing_time_seconds),
        })
    }
}

/// Listing of stored videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListData {
    pub videos: Vec<VideoSummary>,
    pub total: usize,
}

pub const LIST_VIDEOS: &str = "list_videos";
pub const POST_VIDEO: &str = "store_video";
pub const GET_VIDEO: &str = "get_video";
pub const DELETE_VIDEO: &str = "delete_video";
pub const GET_ANALYTICS_REPORT: &str = "get_analytics_report";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_record() {
        let mut record = VideoRecord::new("entrance.mp4");
        record.id = Some(VideoId::new("v-9"));
        record.person_count = 12;
        record.processing_time_seconds = Some(3725.0);

        let summary = VideoSummary::from_record(&record).unwrap();
        assert_eq!(summary.id.value(), "v-9");
        assert_eq!(summary.person_count, 12);
        assert_eq!(summary.processing_time, "1h 2m 5s");
    }

    #[test]
    fn test_summary_requires_id() {
        let record = VideoRecord::new("no-id.mp4");
        assert!(VideoSummary::from_record(&record).is_none());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let mut record = VideoRecord::new("a.mp4");
        record.id = Some(VideoId::new("v"));
        let json = serde_json::to_value(VideoSummary::from_record(&record).unwrap()).unwrap();
        assert_eq!(json["videoName"], "a.mp4");
        assert_eq!(json["processingTime"], "N/A");
        assert!(json.get("processedVideo").is_none());
    }

    #[test]
    fn test_const_values() {
        assert_eq!(LIST_VIDEOS, "list_videos");
        assert_eq!(POST_VIDEO, "store_video");
        assert_eq!(GET_VIDEO, "get_video");
        assert_eq!(DELETE_VIDEO, "delete_video");
        assert_eq!(GET_ANALYTICS_REPORT, "get_analytics_report");
    }
}
