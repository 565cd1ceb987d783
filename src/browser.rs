use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::info;

/// One Chromium instance plus the single page reused for every navigation.
///
/// The CDP event stream must be polled for the browser to make progress,
/// so the session owns a task draining it. Cookies and local storage
/// persist across navigations for the life of the session.
pub struct Session {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl Session {
    /// Launch Chromium and open a blank page.
    pub async fn launch(headed: bool) -> Result<Session> {
        let mut builder = BrowserConfig::builder();
        if headed {
            builder = builder.with_head();
        }
        let config = builder
            .build()
            .map_err(|e| anyhow!("Failed to build browser config: {e}"))?;

        let (browser, mut events) = Browser::launch(config)
            .await
            .context("Failed to launch Chromium")?;

        let handler = tokio::spawn(async move {
            while let Some(_event) = events.next().await {}
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("Failed to open page")?;

        info!("Chromium launched ({})", if headed { "headed" } else { "headless" });
        Ok(Session {
            browser,
            page,
            handler,
        })
    }

    /// Navigate to `url`, wait `delay` for client-side rendering, and return
    /// the full page markup. No readiness polling: the fixed wait is the
    /// only grace period the diagram script gets.
    pub async fn render(&self, url: &str, delay: Duration) -> Result<String> {
        self.page
            .goto(url)
            .await
            .with_context(|| format!("Navigation failed: {url}"))?;
        tokio::time::sleep(delay).await;
        self.page
            .content()
            .await
            .with_context(|| format!("Failed to read page markup: {url}"))
    }

    /// Tear down the page, the browser process, and the event task.
    pub async fn close(self) -> Result<()> {
        let Session {
            mut browser,
            page,
            handler,
        } = self;
        page.close().await.context("Failed to close page")?;
        browser.close().await.context("Failed to close browser")?;
        handler.abort();
        Ok(())
    }
}
