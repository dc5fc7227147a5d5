//! Search for a product and skim the results.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SEARCH_BOX: &str = "#twotabsearchtextbox";

const SLOT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Amazon;

#[async_trait]
impl Scenario<BrowserSession> for Amazon {
    fn name(&self) -> &'static str {
        "amazon"
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
        driver.navigate("https://www.amazon.com").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.type_text(SEARCH_BOX, "usb c wall charger").await?;
        driver.press_key(SEARCH_BOX, "Enter").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        driver.scroll_page(4).await?;
        pause(5).await;

        Ok(())
    }
}
