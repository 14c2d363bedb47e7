//! # solid-adapter-mock-api
//!
//! A stand-in for a remote user API.
//!
//! [`MockUserService`] suspends once, as a real request would, and then fails
//! with [`ApiError::InvalidResponse`]. Because it honours the [`UserService`]
//! contract it can replace a network-backed service anywhere one is expected.
//!
//! ## Dependency rule
//!
//! Depends on `solid-app` (port traits) and `solid-domain` only.

use solid_app::ports::UserService;
use solid_domain::error::ApiError;

/// User service that always receives a malformed response.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockUserService;

impl MockUserService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UserService for MockUserService {
    async fn fetch_user(&self) -> Result<(), ApiError> {
        tokio::task::yield_now().await;
        tracing::debug!("mock user API answered with a malformed payload");
        Err(ApiError::InvalidResponse)
    }
}
