//! Sign in and browse the feed.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

const SLOT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Facebook;

#[async_trait]
impl Scenario<BrowserSession> for Facebook {
    fn name(&self) -> &'static str {
        "facebook"
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
        let login = logins.require("facebook")?;

        driver.navigate("https://www.facebook.com").await?;
        driver.wait_for_navigation().await?;
        pause(2).await;

        debug!("signing in to facebook");
        driver.type_text("#email", &login.username).await?;
        driver.type_text("#pass", &login.password).await?;
        driver.click("button[name='login']").await?;
        driver.wait_for_navigation().await?;
        pause(5).await;

        // Browse the feed the way a person does: a page at a time.
        driver.scroll_page(6).await?;
        pause(3).await;

        Ok(())
    }
}
