//! User fetcher — calls a [`UserService`] and contains its failures.

use crate::ports::{Console, UserService};

/// Fetches the current user through any [`UserService`].
///
/// A failed fetch is logged and reported on the console as a single
/// `Error: …` line. It is never returned to the caller.
pub struct UserFetcher<S, C> {
    service: S,
    console: C,
}

impl<S: UserService, C: Console> UserFetcher<S, C> {
    /// Create a fetcher over the given service, reporting to `console`.
    pub fn new(service: S, console: C) -> Self {
        Self { service, console }
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_user(&self) {
        match self.service.fetch_user().await {
            Ok(()) => tracing::debug!("user fetched"),
            Err(err) => {
                tracing::warn!(%err, "user fetch failed");
                self.console.write_line(&format!("Error: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingConsole;
    use solid_domain::error::ApiError;
    use std::sync::Arc;

    struct FixedUserService(Result<(), ApiError>);

    impl UserService for FixedUserService {
        async fn fetch_user(&self) -> Result<(), ApiError> {
            self.0
        }
    }

    #[tokio::test]
    async fn should_report_error_line_when_fetch_fails() {
        let console = Arc::new(RecordingConsole::default());
        let fetcher = UserFetcher::new(
            FixedUserService(Err(ApiError::InvalidResponse)),
            console.clone(),
        );

        fetcher.fetch_user().await;

        assert_eq!(console.lines(), vec!["Error: invalid response"]);
    }

    #[tokio::test]
    async fn should_stay_silent_when_fetch_succeeds() {
        let console = Arc::new(RecordingConsole::default());
        let fetcher = UserFetcher::new(FixedUserService(Ok(())), console.clone());

        fetcher.fetch_user().await;

        assert!(console.lines().is_empty());
    }

    #[tokio::test]
    async fn should_contain_every_error_kind() {
        for kind in [
            ApiError::InvalidUrl,
            ApiError::InvalidResponse,
            ApiError::InvalidStatusCode,
        ] {
            let console = Arc::new(RecordingConsole::default());
            let fetcher = UserFetcher::new(FixedUserService(Err(kind)), console.clone());

            fetcher.fetch_user().await;

            assert_eq!(console.lines(), vec![format!("Error: {kind}")]);
        }
    }
}
