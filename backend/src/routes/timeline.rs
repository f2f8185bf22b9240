use serde::{Deserialize, Serialize};

use crate::api::{CountSample, VideoId};

// =========================================================
// Video timeline types
// =========================================================

/// Display unit used for axis labels, tied to the bucket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Seconds,
    Minutes,
    Hours,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Seconds => "seconds",
            Granularity::Minutes => "minutes",
            Granularity::Hours => "hours",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket width and label unit chosen for one duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketPlan {
    pub bucket_size_seconds: u64,
    pub granularity: Granularity,
}

impl BucketPlan {
    pub const fn new(bucket_size_seconds: u64, granularity: Granularity) -> Self {
        Self {
            bucket_size_seconds,
            granularity,
        }
    }
}

/// One aggregated bucket: start second and rounded mean count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketedPoint {
    pub bucket_start: u64,
    pub value: u64,
}

impl BucketedPoint {
    pub const fn new(bucket_start: u64, value: u64) -> Self {
        Self {
            bucket_start,
            value,
        }
    }
}

/// Chart row as consumed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub second: u64,
    pub person_count: u64,
}

impl From<BucketedPoint> for TimelinePoint {
    fn from(point: BucketedPoint) -> Self {
        Self {
            second: point.bucket_start,
            person_count: point.value,
        }
    }
}

/// Ready-to-render occupancy timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoTimeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<VideoId>,
    pub data: Vec<TimelinePoint>,
    pub ticks: Vec<u64>,
    /// Tick text rendered with the timeline granularity, parallel to `ticks`.
    pub tick_labels: Vec<String>,
    pub end_second: u64,
    pub bucket_size_seconds: u64,
    pub granularity: Granularity,
    pub peak_count: u64,
}

/// Ad-hoc timeline input for callers that hold the analytics payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineRequest {
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub counts_per_second: Vec<CountSample>,
    #[serde(default)]
    pub fallback_count: u64,
}

/// Route function name constant for the video timeline
pub const GET_VIDEO_TIMELINE: &str = "get_video_timeline";
/// Route function name constant for ad-hoc timeline computation
pub const POST_TIMELINE: &str = "compute_timeline";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_serializes_lowercase() {
        let json = serde_json::to_string(&Granularity::Minutes).unwrap();
        assert_eq!(json, "\"minutes\"");
        assert_eq!(Granularity::Hours.to_string(), "hours");
    }

    #[test]
    fn test_granularity_ordering_follows_unit_size() {
        assert!(Granularity::Seconds < Granularity::Minutes);
        assert!(Granularity::Minutes < Granularity::Hours);
    }

    #[test]
    fn test_timeline_point_from_bucket() {
        let point = TimelinePoint::from(BucketedPoint::new(60, 7));
        assert_eq!(point.second, 60);
        assert_eq!(point.person_count, 7);
    }

    #[test]
    fn test_timeline_point_camel_case() {
        let json = serde_json::to_value(TimelinePoint {
            second: 3,
            person_count: 2,
        })
        .unwrap();
        assert_eq!(json["personCount"], 2);
    }

    #[test]
    fn test_timeline_request_defaults() {
        let request: TimelineRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.duration_seconds, None);
        assert!(request.counts_per_second.is_empty());
        assert_eq!(request.fallback_count, 0);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_VIDEO_TIMELINE, "get_video_timeline");
        assert_eq!(POST_TIMELINE, "compute_timeline");
    }
}
