//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use super::dto::{
    CountSample, HealthResponse, TimelineRequest, VideoId, VideoListData, VideoRecord, VideoSummary,
    VideoTimeline,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::{self, REPORT_FILENAME};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Video records
// =============================================================================

/// GET /v1/videos
///
/// List stored videos, newest first.
pub async fn list_videos(State(state): State<AppState>) -> HandlerResult<VideoListData> {
    let records = db_services::list_videos(state.repository.as_ref()).await?;

    let videos: Vec<VideoSummary> = records.iter().filter_map(VideoSummary::from_record).collect();
    let total = videos.len();

    Ok(Json(VideoListData { videos, total }))
}

/// POST /v1/videos
///
/// Store a processed video record. Returns the record with its assigned id.
pub async fn create_video(
    State(state): State<AppState>,
    Json(record): Json<VideoRecord>,
) -> Result<(StatusCode, Json<VideoRecord>), AppError> {
    let stored = db_services::store_video(state.repository.as_ref(), record).await?;
    info!(video_id = ?stored.id, "Stored video record");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/videos/{video_id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> HandlerResult<VideoRecord> {
    let video_id = VideoId::new(video_id);
    let record = db_services::get_video(state.repository.as_ref(), &video_id).await?;
    Ok(Json(record))
}

/// DELETE /v1/videos/{video_id}
pub async fn delete_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let video_id = VideoId::new(video_id);
    db_services::delete_video(state.repository.as_ref(), &video_id).await?;
    info!(%video_id, "Deleted video record");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Timeline
// =============================================================================

/// GET /v1/videos/{video_id}/timeline
///
/// Downsampled occupancy timeline with axis ticks for one video.
pub async fn get_video_timeline(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> HandlerResult<VideoTimeline> {
    let video_id = VideoId::new(video_id);
    let record = db_services::get_video(state.repository.as_ref(), &video_id).await?;
    ensure_duration_within(
        &state,
        &record.details.counts_per_second,
        record.details.duration_seconds,
    )?;

    // Bucketing is linear in the number of buckets; keep it off the async workers
    let timeline = tokio::task::spawn_blocking(move || services::build_video_timeline(&record))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    debug!(
        %video_id,
        buckets = timeline.data.len(),
        granularity = %timeline.granularity,
        "Built video timeline"
    );
    Ok(Json(timeline))
}

/// POST /v1/timeline
///
/// Compute a timeline for an analytics payload that is not stored.
pub async fn compute_timeline(
    State(state): State<AppState>,
    Json(request): Json<TimelineRequest>,
) -> HandlerResult<VideoTimeline> {
    ensure_duration_within(&state, &request.counts_per_second, request.duration_seconds)?;

    let timeline = tokio::task::spawn_blocking(move || services::build_timeline(&request))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(timeline))
}

/// Reject timelines longer than the configured cap before any bucket is allocated.
fn ensure_duration_within(
    state: &AppState,
    counts_per_second: &[CountSample],
    duration_seconds: Option<f64>,
) -> Result<(), AppError> {
    let end_second = services::resolve_duration_seconds(counts_per_second, duration_seconds);
    if end_second > state.max_duration_seconds {
        return Err(AppError::BadRequest(format!(
            "Timeline duration {}s exceeds the limit of {}s",
            end_second, state.max_duration_seconds
        )));
    }
    Ok(())
}

// =============================================================================
// Report
// =============================================================================

/// GET /v1/analytics/report
///
/// CSV export of all stored videos.
pub async fn get_analytics_report(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = db_services::list_videos(state.repository.as_ref()).await?;
    let csv = services::render_report_csv(&records);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILENAME),
            ),
        ],
        csv,
    ))
}
