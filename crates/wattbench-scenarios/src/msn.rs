//! Skim the news portal front page.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(45);

#[derive(Debug)]
pub struct Msn;

#[async_trait]
impl Scenario<BrowserSession> for Msn {
    fn name(&self) -> &'static str {
        "msn"
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
        driver.navigate("https://www.msn.com").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.scroll_page(5).await?;
        pause(3).await;

        Ok(())
    }
}
