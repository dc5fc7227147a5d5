//! A live browser session: one process, one focused tab at a time.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use wattbench_core::{BrowserKind, SessionDriver};

use crate::error::{Error, Result};
use crate::launcher::SessionLauncher;

/// Settle time after launch before the first scenario issues commands.
const LAUNCH_SETTLE: Duration = Duration::from_secs(3);

/// Settle time after opening a tab, so the next scenario's first commands
/// are not lost while the tab comes up. Counts against that scenario's
/// slot.
const TAB_SETTLE: Duration = Duration::from_secs(2);

/// Interval between page-down presses when scrolling.
const SCROLL_PAUSE: Duration = Duration::from_secs(1);

const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

/// One live browser instance. Exactly one exists per measurement run; it is
/// created before the first scenario and released exactly once at the end.
pub struct BrowserSession {
    kind: BrowserKind,
    browser: Browser,
    page: RwLock<Page>,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch the browser and adopt its initial tab as the active page.
    pub async fn launch(launcher: &SessionLauncher) -> Result<Self> {
        info!(kind = %launcher.kind(), executable = %launcher.executable().display(), "launching browser");
        let config = launcher.browser_config()?;
        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler must be polled for any devtools command to make
        // progress. It ending early means the browser process went away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("cdp handler event error: {e}");
                }
            }
            warn!("browser disconnected (cdp handler ended)");
        });

        // The browser comes up with one blank tab. Adopt it, and close any
        // strays so the first scenario starts from a known state.
        let mut pages = browser.pages().await?;
        let page = if pages.is_empty() {
            browser.new_page("about:blank").await?
        } else {
            let page = pages.remove(0);
            for extra in pages {
                let _ = extra.close().await;
            }
            page
        };

        tokio::time::sleep(LAUNCH_SETTLE).await;

        Ok(Self {
            kind: launcher.kind(),
            browser,
            page: RwLock::new(page),
            handler_task,
        })
    }

    pub fn kind(&self) -> BrowserKind {
        self.kind
    }

    /// Open a fresh tab and make it the target of subsequent commands.
    /// Each scenario gets its own tab so history and cookies from the
    /// previous one cannot interfere.
    pub async fn open_tab_and_focus(&self) -> Result<()> {
        debug!("opening new tab");
        let page = self.browser.new_page("about:blank").await?;
        page.bring_to_front().await?;
        *self.page.write().await = page;
        tokio::time::sleep(TAB_SETTLE).await;
        Ok(())
    }

    async fn page(&self) -> Page {
        self.page.read().await.clone()
    }

    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        let page = self.page().await;
        page.goto(url)
            .await
            .map_err(|e| Error::Navigation(format!("{url}: {e}")))?;
        Ok(())
    }

    /// Wait until the active page finishes loading.
    pub async fn wait_for_navigation(&self) -> Result<()> {
        let page = self.page().await;
        tokio::time::timeout(NAVIGATION_TIMEOUT, page.wait_for_navigation())
            .await
            .map_err(|_| Error::Timeout("navigation".into()))?
            .map_err(|e| Error::Navigation(e.to_string()))?;
        Ok(())
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        let page = self.page().await;
        let element = page
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        element.click().await.map_err(|e| Error::Cdp(e.to_string()))?;
        Ok(())
    }

    /// Click `selector`, then type `text` into it.
    pub async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let page = self.page().await;
        let element = page
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        element.click().await.map_err(|e| Error::Cdp(e.to_string()))?;
        element
            .type_str(text)
            .await
            .map_err(|e| Error::Cdp(e.to_string()))?;
        Ok(())
    }

    /// Send a single named key ("Enter", "PageDown", ...) to `selector`.
    pub async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        let page = self.page().await;
        let element = page
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        element
            .press_key(key)
            .await
            .map_err(|e| Error::Cdp(e.to_string()))?;
        Ok(())
    }

    /// Scroll by pressing page-down, one press per second. Key events move
    /// the page the way a user does; script-driven scrolling renders
    /// differently on several of the scenario sites.
    pub async fn scroll_page(&self, times: usize) -> Result<()> {
        for _ in 0..times {
            self.press_key("body", "PageDown").await?;
            tokio::time::sleep(SCROLL_PAUSE).await;
        }
        Ok(())
    }

    /// Evaluate a script on the active page and return its JSON value.
    pub async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let page = self.page().await;
        let result = page
            .evaluate(script)
            .await
            .map_err(|e| Error::Script(e.to_string()))?;
        result.into_value().map_err(|e| Error::Script(e.to_string()))
    }

    pub async fn current_url(&self) -> Result<String> {
        let page = self.page().await;
        page.url()
            .await
            .map_err(|e| Error::Cdp(e.to_string()))?
            .ok_or_else(|| Error::Cdp("page has no url".into()))
    }

    /// Quit the browser. Consumes the session: there is exactly one release
    /// per run, on success and failure alike.
    pub async fn close(mut self) -> Result<()> {
        info!("closing browser session");
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}

#[async_trait]
impl SessionDriver for BrowserSession {
    async fn open_tab_and_focus(&self) -> anyhow::Result<()> {
        BrowserSession::open_tab_and_focus(self).await?;
        Ok(())
    }
}
