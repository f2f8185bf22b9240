//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::VideoRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for video records
    pub repository: Arc<dyn VideoRepository>,
    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
    /// Longest timeline, in seconds, the handlers will build
    pub max_duration_seconds: u64,
}

impl AppState {
    /// Default body limit used when none is configured.
    pub const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

    /// Default timeline duration cap (7 days).
    pub const DEFAULT_MAX_DURATION_SECONDS: u64 = 7 * 24 * 60 * 60;

    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self {
            repository,
            body_limit_bytes: Self::DEFAULT_BODY_LIMIT_BYTES,
            max_duration_seconds: Self::DEFAULT_MAX_DURATION_SECONDS,
        }
    }

    pub fn with_body_limit(mut self, body_limit_bytes: usize) -> Self {
        self.body_limit_bytes = body_limit_bytes;
        self
    }

    pub fn with_max_duration(mut self, max_duration_seconds: u64) -> Self {
        self.max_duration_seconds = max_duration_seconds;
        self
    }
}
