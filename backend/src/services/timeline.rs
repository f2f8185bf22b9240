//! Occupancy timeline downsampling and axis ticks.
//!
//! A video's sparse per-second person counts are turned into a bounded number
//! of chart buckets in three stateless steps:
//!
//! 1. [`select_bucket_plan`] picks a bucket width and label unit from the duration.
//! 2. [`build_series`] carries the last known count forward over gaps and
//!    averages each bucket.
//! 3. [`build_ticks`] spaces roughly ten axis ticks and always ends on the duration.
//!
//! [`format_tick`] and [`format_tooltip`] render labels for the chosen unit.
//! Every function here is pure; inputs that are negative or not finite are
//! clamped to zero so a malformed payload degrades the chart instead of
//! failing the request.

use std::collections::BTreeMap;

use log::debug;

use crate::api::{
    BucketPlan, BucketedPoint, CountSample, Granularity, TimelinePoint, TimelineRequest,
    VideoRecord, VideoTimeline,
};

/// Number of regular ticks the axis aims for.
pub const TARGET_TICK_COUNT: u64 = 10;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Inclusive duration ceilings, first match wins.
const PLAN_TABLE: [(u64, BucketPlan); 4] = [
    (10 * 60, BucketPlan::new(1, Granularity::Seconds)),
    (2 * 60 * 60, BucketPlan::new(60, Granularity::Minutes)),
    (12 * 60 * 60, BucketPlan::new(30 * 60, Granularity::Minutes)),
    (48 * 60 * 60, BucketPlan::new(60 * 60, Granularity::Hours)),
];

const LONGEST_PLAN: BucketPlan = BucketPlan::new(2 * 60 * 60, Granularity::Hours);

/// Choose the bucket width for a timeline of `duration_seconds`.
pub fn select_bucket_plan(duration_seconds: u64) -> BucketPlan {
    PLAN_TABLE
        .iter()
        .find(|(ceiling, _)| duration_seconds <= *ceiling)
        .map(|(_, plan)| *plan)
        .unwrap_or(LONGEST_PLAN)
}

/// Effective duration: the later of the last observed second and the
/// reported media length rounded up.
pub fn resolve_duration_seconds(observations: &[CountSample], reported: Option<f64>) -> u64 {
    let max_observed = observations.iter().map(|o| o.second).max().unwrap_or(0);
    let reported = reported.map(clamp_non_negative).unwrap_or(0.0).ceil() as u64;
    max_observed.max(reported)
}

/// Aggregate sparse observations into contiguous buckets covering
/// `[0, duration_seconds]`.
///
/// Every second takes the observation at that second or, failing that, the
/// most recent earlier one. Seconds before the earliest observed second use
/// the count of the first entry in `observations` as given, or
/// `fallback_count` when there are none. Duplicate seconds resolve to the
/// last entry in `observations`.
///
/// Runs in O(observations + buckets): each bucket sums the constant runs
/// between consecutive observations rather than visiting every second.
pub fn build_series(
    duration_seconds: u64,
    bucket_size_seconds: u64,
    observations: &[CountSample],
    fallback_count: u64,
) -> Vec<BucketedPoint> {
    let bucket_size = bucket_size_seconds.max(1);
    let mut last_known = observations
        .first()
        .map(|sample| sample.count)
        .unwrap_or(fallback_count);

    let mut by_second: BTreeMap<u64, u64> = BTreeMap::new();
    for sample in observations {
        by_second.insert(sample.second, sample.count);
    }
    let samples: Vec<(u64, u64)> = by_second.into_iter().collect();

    let mut next = 0usize;

    let mut series = Vec::new();

    let mut bucket_start = 0u64;
    loop {
        let bucket_end = bucket_start.saturating_add(bucket_size - 1).min(duration_seconds);
        let mut sum: u128 = 0;
        let mut cursor = bucket_start;

        while let Some(&(second, count)) = samples.get(next) {
            if second > bucket_end {
                break;
            }
            sum += u128::from(last_known) * u128::from(second - cursor);
            last_known = count;
            cursor = second;
            next += 1;
        }
        sum += u128::from(last_known) * u128::from(bucket_end - cursor + 1);

        let width = u128::from(bucket_end - bucket_start + 1);
        series.push(BucketedPoint::new(bucket_start, rounded_mean(sum, width)));

        if bucket_end >= duration_seconds {
            break;
        }
        bucket_start += bucket_size;
    }

    series
}

/// Mean rounded half-up; an empty bucket averages to zero.
fn rounded_mean(sum: u128, samples: u128) -> u64 {
    if samples == 0 {
        return 0;
    }
    let mean = (2 * sum + samples) / (2 * samples);
    u64::try_from(mean).unwrap_or(u64::MAX)
}

/// Axis ticks for a timeline: about [`TARGET_TICK_COUNT`] steps that are whole
/// multiples of the bucket width, starting at 0 and ending at `duration_seconds`.
pub fn build_ticks(duration_seconds: u64, bucket_size_seconds: u64) -> Vec<u64> {
    if duration_seconds == 0 {
        return vec![0];
    }

    let bucket_size = bucket_size_seconds.max(1);
    let total_buckets = duration_seconds.div_ceil(bucket_size).max(1);
    let buckets_per_tick = total_buckets.div_ceil(TARGET_TICK_COUNT).max(1);
    let tick_step = buckets_per_tick.saturating_mul(bucket_size);

    let mut ticks = Vec::new();
    let mut tick = 0u64;
    while tick <= duration_seconds {
        ticks.push(tick);
        match tick.checked_add(tick_step) {
            Some(next) => tick = next,
            None => break,
        }
    }

    if ticks.last() != Some(&duration_seconds) {
        ticks.push(duration_seconds);
    }
    ticks
}

/// Short axis label such as `"125s"`, `"2m"` or `"3h"`.
pub fn format_tick(value: f64, granularity: Granularity) -> String {
    let value = clamp_non_negative(value);
    match granularity {
        Granularity::Seconds => format!("{}s", value),
        Granularity::Minutes => format!("{}m", round_half_up(value / SECONDS_PER_MINUTE)),
        Granularity::Hours => format!("{}h", round_half_up(value / SECONDS_PER_HOUR)),
    }
}

/// Tooltip heading such as `"Second 12"` or `"Hour 2"`.
pub fn format_tooltip(value: f64, granularity: Granularity) -> String {
    let value = clamp_non_negative(value);
    match granularity {
        Granularity::Seconds => format!("Second {}", round_half_up(value)),
        Granularity::Minutes => format!("Minute {}", round_half_up(value / SECONDS_PER_MINUTE)),
        Granularity::Hours => format!("Hour {}", round_half_up(value / SECONDS_PER_HOUR)),
    }
}

/// Render a processing duration as `"1h 2m 3s"`, `"2m 3s"` or `"3s"`.
pub fn format_processing_time(seconds: Option<f64>) -> String {
    let seconds = match seconds {
        Some(s) if s.is_finite() && s > 0.0 => s,
        _ => return "N/A".to_string(),
    };

    let total = round_half_up(seconds);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let remaining = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, remaining)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, remaining)
    } else {
        format!("{}s", remaining)
    }
}

/// Run the full pipeline over an analytics payload.
pub fn build_timeline(request: &TimelineRequest) -> VideoTimeline {
    let end_second =
        resolve_duration_seconds(&request.counts_per_second, request.duration_seconds);
    let plan = select_bucket_plan(end_second);

    let series = build_series(
        end_second,
        plan.bucket_size_seconds,
        &request.counts_per_second,
        request.fallback_count,
    );
    let ticks = build_ticks(end_second, plan.bucket_size_seconds);
    let tick_labels = ticks
        .iter()
        .map(|&tick| format_tick(tick as f64, plan.granularity))
        .collect();
    let peak_count = series.iter().map(|p| p.value).max().unwrap_or(0);

    debug!(
        "Built timeline: end_second={}, bucket_size={}, buckets={}, ticks={}",
        end_second,
        plan.bucket_size_seconds,
        series.len(),
        ticks.len()
    );

    VideoTimeline {
        video_id: None,
        data: series.into_iter().map(TimelinePoint::from).collect(),
        ticks,
        tick_labels,
        end_second,
        bucket_size_seconds: plan.bucket_size_seconds,
        granularity: plan.granularity,
        peak_count,
    }
}

/// Timeline for a stored video, falling back to its scalar person count when
/// the pipeline produced no per-second series.
pub fn build_video_timeline(record: &VideoRecord) -> VideoTimeline {
    let request = TimelineRequest {
        duration_seconds: record.details.duration_seconds,
        counts_per_second: record.details.counts_per_second.clone(),
        fallback_count: record.person_count,
    };
    VideoTimeline {
        video_id: record.id.clone(),
        ..build_timeline(&request)
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn round_half_up(value: f64) -> u64 {
    (clamp_non_negative(value) + 0.5).floor() as u64
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod timeline_tests;
