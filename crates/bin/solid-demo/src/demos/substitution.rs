//! Liskov substitution: a mock user service stands in for a real one.

use std::sync::Arc;

use solid_adapter_mock_api::MockUserService;
use solid_app::ports::Console;
use solid_app::services::user_fetcher::UserFetcher;
use tokio::task::JoinHandle;

pub const TITLE: &str = "Liskov Substitution Principle (LSP)";

/// Print the header and start the user lookup on its own task.
///
/// The lookup's `Error: …` line is written whenever the task gets to run,
/// which may be after later demos have printed.
pub fn spawn(console: Arc<dyn Console>) -> JoinHandle<()> {
    super::header(console.as_ref(), TITLE);

    let fetcher = UserFetcher::new(MockUserService::new(), console);
    tokio::spawn(async move { fetcher.fetch_user().await })
}
