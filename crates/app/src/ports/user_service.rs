//! User service port — remote lookup of the current user.
//!
//! Every implementation (mock, HTTP-backed, …) shares the same contract:
//! the call may suspend, and it fails only with a kind from the closed
//! [`ApiError`] set.

use std::future::Future;
use std::sync::Arc;

use solid_domain::error::ApiError;

/// Fetches a user from an API.
pub trait UserService {
    /// Fetch the user.
    fn fetch_user(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl<T: UserService + Send + Sync> UserService for Arc<T> {
    fn fetch_user(&self) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).fetch_user()
    }
}
