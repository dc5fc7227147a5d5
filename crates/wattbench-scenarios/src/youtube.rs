//! Watch a video.

use std::time::Duration;

use async_trait::async_trait;
use wattbench_browser::BrowserSession;
use wattbench_core::{BrowserKind, CredentialStore, Scenario, ScenarioResult};

use crate::pause;

// A long, stable, freely licensed upload; the player UI around it changes,
// the watch URL does not.
const WATCH_URL: &str = "https://www.youtube.com/watch?v=aqz-KE-bpKQ";

const SLOT: Duration = Duration::from_secs(90);

#[derive(Debug)]
pub struct Youtube;

#[async_trait]
impl Scenario<BrowserSession> for Youtube {
    fn name(&self) -> &'static str {
        "youtube"
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
        driver.navigate(WATCH_URL).await?;
        driver.wait_for_navigation().await?;
        pause(3).await;

        // Autoplay usually starts on its own; nudge the player if it did
        // not, without toggling an already-playing video.
        driver
            .evaluate(
                "(() => { const v = document.querySelector('video'); \
                 if (v && v.paused) { v.play(); } return null; })()",
            )
            .await?;

        // The watching itself is the workload.
        pause(60).await;

        Ok(())
    }
}
