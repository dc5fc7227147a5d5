//! Browse a subreddit feed.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Reddit;

#[async_trait]
impl Scenario<BrowserSession> for Reddit {
    fn name(&self) -> &'static str {
        "reddit"
    }

    fn duration(&self) -> Duration {
        SLOT
    }

    async fn run(
        &self,
        driver: &BrowserSession,
        _browser: BrowserKind,
        _logins: &CredentialStore,
    ) -> ScenarioResult {
        driver
            .navigate("https://www.reddit.com/r/technology/")
            .await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        // The feed lazy-loads; paging down keeps it fetching.
        driver.scroll_page(8).await?;
        pause(3).await;

        Ok(())
    }
}
