//! Storage module for video analytics records.
//!
//! This module provides abstractions for storage via the Repository pattern,
//! allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers                                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - validation, logging      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;
pub mod services;

pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, VideoRepository};
pub use services::{delete_video, get_video, health_check, list_videos, store_video};

use std::path::Path;
use std::sync::Arc;

use log::info;

/// Build the repository selected by the enabled features, optionally
/// preloaded from a seed file.
pub fn create_repository(seed_file: Option<&Path>) -> RepositoryResult<Arc<dyn VideoRepository>> {
    let repo = match seed_file {
        Some(path) => {
            let repo = LocalRepository::from_seed_file(path)?;
            info!(
                "Loaded {} seed videos from {}",
                repo.video_count(),
                path.display()
            );
            repo
        }
        None => LocalRepository::new(),
    };
    Ok(Arc::new(repo))
}
