//! Shared application state for axum handlers.

use std::sync::Arc;

use hostel_app::ports::{RoomRepository, StudentRepository};
use hostel_app::services::allocation_service::AllocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<RR, SR> {
    /// Room and student allocation service.
    pub allocation: Arc<AllocationService<RR, SR>>,
}

impl<RR, SR> Clone for AppState<RR, SR> {
    fn clone(&self) -> Self {
        Self {
            allocation: Arc::clone(&self.allocation),
        }
    }
}

impl<RR, SR> AppState<RR, SR>
where
    RR: RoomRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(allocation: AllocationService<RR, SR>) -> Self {
        Self {
            allocation: Arc::new(allocation),
        }
    }
}
