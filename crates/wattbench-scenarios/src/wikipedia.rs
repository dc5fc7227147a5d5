//! Read an article, then follow a search to a second one.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(45);

#[derive(Debug)]
pub struct Wikipedia;

#[async_trait]
impl Scenario<BrowserSession> for Wikipedia {
    fn name(&self) -> &'static str {
        "wikipedia"
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
            .navigate("https://en.wikipedia.org/wiki/Electric_power")
            .await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.scroll_page(8).await?;

        driver
            .type_text("#searchInput", "Battery (electricity)")
            .await?;
        driver.press_key("#searchInput", "Enter").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.scroll_page(4).await?;

        Ok(())
    }
}
