#[cfg(test)]
mod tests {
    use crate::api::{CountSample, VideoDetails, VideoId, VideoRecord, VideoStatus};
    use chrono::TimeZone;

    #[test]
    fn test_video_id_new() {
        let id = VideoId::new("abc-123");
        assert_eq!(id.value(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_video_id_generate_is_unique() {
        let a = VideoId::generate();
        let b = VideoId::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_video_id_blank_is_empty() {
        assert!(VideoId::new("   ").is_empty());
    }

    #[test]
    fn test_video_id_serializes_transparently() {
        let json = serde_json::to_string(&VideoId::new("v1")).unwrap();
        assert_eq!(json, "\"v1\"");
    }

    #[test]
    fn test_video_status_lowercase() {
        let json = serde_json::to_string(&VideoStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let status: VideoStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, VideoStatus::Completed);
        assert_eq!(VideoStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_video_details_defaults_when_missing() {
        let details: VideoDetails = serde_json::from_str("{}").unwrap();
        assert_eq!(details.duration_seconds, None);
        assert!(details.counts_per_second.is_empty());
    }

    #[test]
    fn test_video_record_from_pipeline_json() {
        let json = r#"{
            "id": "vid-1",
            "video_name": "lobby.mp4",
            "uploaded_at": "2024-03-05T10:15:00Z",
            "person_count": 4,
            "status": "completed",
            "details": {
                "fps": 25.0,
                "duration_seconds": 12.4,
                "counts_per_second": [{"second": 3, "count": 2}, {"second": 0, "count": 1}]
            }
        }"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, Some(VideoId::new("vid-1")));
        assert_eq!(record.person_count, 4);
        assert_eq!(record.details.counts_per_second[0], CountSample::new(3, 2));
        assert_eq!(record.upload_date(), "2024-03-05");
    }

    #[test]
    fn test_video_record_upload_date() {
        let mut record = VideoRecord::new("clip.mp4");
        record.uploaded_at = chrono::Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(record.upload_date(), "2023-12-31");
    }
}
