//! Read through the news site's lead stories.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(45);

#[derive(Debug)]
pub struct Msnbc;

#[async_trait]
impl Scenario<BrowserSession> for Msnbc {
    fn name(&self) -> &'static str {
        "msnbc"
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
        driver.navigate("https://www.msnbc.com").await?;
        driver.wait_for_navigation().await?;
        pause(3).await;

        driver.scroll_page(4).await?;
        pause(5).await;
        driver.scroll_page(3).await?;

        Ok(())
    }
}
