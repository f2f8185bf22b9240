//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the repository
//! and the HTTP handlers. Services hold the pure computations behind each
//! dashboard component.

pub mod report;

pub mod timeline;

pub use report::{render_report_csv, REPORT_FILENAME};
pub use timeline::{
    build_series, build_ticks, build_timeline, build_video_timeline, format_processing_time,
    format_tick, format_tooltip, resolve_duration_seconds, select_bucket_plan,
};
