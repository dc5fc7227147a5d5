//! Run a couple of searches and skim the results.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

// Google serves either a textarea or an input for the query box depending
// on the experiment bucket.
const QUERY_BOX: &str = "textarea[name='q'], input[name='q']";

const SLOT: Duration = Duration::from_secs(45);

#[derive(Debug)]
pub struct Google;

impl Google {
    async fn search(&self, driver: &BrowserSession, query: &str) -> ScenarioResult {
        driver.navigate("https://www.google.com").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.type_text(QUERY_BOX, query).await?;
        driver.press_key(QUERY_BOX, "Enter").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.scroll_page(2).await?;
        Ok(())
    }
}

#[async_trait]
impl Scenario<BrowserSession> for Google {
    fn name(&self) -> &'static str {
        "google"
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
        self.search(driver, "weather this weekend").await?;
        self.search(driver, "laptop battery life comparison").await?;
        pause(3).await;

        Ok(())
    }
}
