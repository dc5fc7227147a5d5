//! Sign in to the webmail client and read the inbox.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Outlook;

#[async_trait]
impl Scenario<BrowserSession> for Outlook {
    fn name(&self) -> &'static str {
        "outlook"
    }

    fn duration(&self) -> Duration {
        SLOT
    }

    async fn run(
        &self,
        driver: &BrowserSession,
        _browser: BrowserKind,
        logins: &CredentialStore,
    ) -> ScenarioResult {
        let login = logins.require("outlook")?;

        driver.navigate("https://login.live.com").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        debug!("signing in to outlook");
        driver.type_text("input[type='email']", &login.username).await?;
        driver.press_key("input[type='email']", "Enter").await?;
        pause(3).await;

        driver
            .type_text("input[type='password']", &login.password)
            .await?;
        driver.press_key("input[type='password']", "Enter").await?;
        driver.wait_for_navigation().await?;
        pause(5).await;

        driver.navigate("https://outlook.live.com/mail/").await?;
        driver.wait_for_navigation().await?;
        pause(8).await;

        driver.scroll_page(2).await?;

        Ok(())
    }
}
