//! Sign in and read the inbox.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Gmail;

#[async_trait]
impl Scenario<BrowserSession> for Gmail {
    fn name(&self) -> &'static str {
        "gmail"
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
        let login = logins.require("gmail")?;

        driver
            .navigate("https://accounts.google.com/ServiceLogin?service=mail")
            .await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        // Two-step sign-in: identifier first, then the password screen.
        debug!("signing in to gmail");
        driver.type_text("input[type='email']", &login.username).await?;
        driver.press_key("input[type='email']", "Enter").await?;
        pause(3).await;

        driver
            .type_text("input[type='password']", &login.password)
            .await?;
        driver.press_key("input[type='password']", "Enter").await?;
        driver.wait_for_navigation().await?;

        // Let the inbox finish rendering, then skim it.
        pause(8).await;
        driver.scroll_page(3).await?;
        pause(3).await;

        Ok(())
    }
}
