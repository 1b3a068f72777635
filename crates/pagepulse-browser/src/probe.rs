use crate::{Error, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use pagepulse_core::signals::{PageSignals, SignalExtractor};
use serde::Deserialize;
use std::time::Duration;

/// In-page extraction script. Runs once after load and returns every
/// signal the scorers need in a single round-trip: document metadata,
/// conversion elements, visible word count, and Navigation Timing.
/// The CTA heuristic counts buttons and links whose class carries a
/// btn/button/cta marker; unclassed elements do not count.
const EXTRACT_SCRIPT: &str = r#"
(() => {
    const nav = performance.getEntriesByType('navigation')[0];
    const timing = performance.timing;
    const load_time_ms = nav
        ? Math.max(0, Math.round(nav.loadEventEnd))
        : Math.max(0, timing.loadEventEnd - timing.navigationStart);
    const dom_ready_ms = nav
        ? Math.max(0, Math.round(nav.domContentLoadedEventEnd))
        : Math.max(0, timing.domContentLoadedEventEnd - timing.navigationStart);

    const meta = document.querySelector('meta[name="description"]');
    const ctaPattern = /(btn|button|cta)/i;
    const cta_count = Array.from(document.querySelectorAll('button, a'))
        .filter((el) => ctaPattern.test(el.getAttribute('class') || ''))
        .length;

    const text = document.body ? document.body.innerText : '';
    const trimmed = text.trim();
    const word_count = trimmed ? trimmed.split(/\s+/).length : 0;

    return {
        title: document.title || null,
        meta_description: meta ? meta.getAttribute('content') : null,
        h1_count: document.querySelectorAll('h1').length,
        cta_count,
        form_count: document.querySelectorAll('form').length,
        word_count,
        load_time_ms,
        dom_ready_ms,
        transfer_size_bytes: nav && nav.transferSize ? Math.round(nav.transferSize) : 0,
    };
})()
"#;

/// Payload shape produced by [`EXTRACT_SCRIPT`].
#[derive(Debug, Deserialize)]
struct RawProbe {
    title: Option<String>,
    meta_description: Option<String>,
    h1_count: usize,
    cta_count: usize,
    form_count: usize,
    word_count: usize,
    load_time_ms: u64,
    dom_ready_ms: u64,
    transfer_size_bytes: u64,
}

impl From<RawProbe> for PageSignals {
    fn from(raw: RawProbe) -> Self {
        // zero transfer size means the browser could not report it
        let page_size_kb = (raw.transfer_size_bytes > 0)
            .then(|| (raw.transfer_size_bytes as f64 / 1024.0 * 100.0).round() / 100.0);

        PageSignals {
            title: raw.title.filter(|t| !t.is_empty()),
            meta_description: raw.meta_description.filter(|m| !m.is_empty()),
            h1_count: raw.h1_count,
            cta_count: raw.cta_count,
            form_count: raw.form_count,
            word_count: raw.word_count,
            load_time_ms: raw.load_time_ms,
            dom_ready_ms: raw.dom_ready_ms,
            page_size_kb,
        }
    }
}

/// Headless-Chrome implementation of the [`SignalExtractor`] contract.
///
/// Each fetch launches its own browser so concurrent probes stay fully
/// isolated; the instance is torn down before the signals are returned.
pub struct PageProbe;

impl PageProbe {
    pub fn new() -> Self {
        Self
    }

    async fn probe(&self, url: &str, timeout: Duration) -> Result<PageSignals> {
        tracing::debug!("Launching headless Chrome for {}", url);

        let config = BrowserConfig::builder()
            .build()
            .map_err(Error::Browser)?;
        let (mut browser, mut handler) = Browser::launch(config).await?;

        // The handler task must run for page commands to make progress
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let signals = match tokio::time::timeout(timeout, Self::extract(&browser, url)).await {
            Ok(result) => result,
            Err(_) => Err(Error::NavigationTimeout(timeout)),
        };

        if let Err(e) = browser.close().await {
            tracing::debug!("Failed to close browser cleanly: {}", e);
        }
        let _ = browser.wait().await;
        handler_task.abort();

        signals
    }

    async fn extract(browser: &Browser, url: &str) -> Result<PageSignals> {
        let page = browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        let raw: RawProbe = page
            .evaluate(EXTRACT_SCRIPT)
            .await?
            .into_value()
            .map_err(|e| Error::Browser(format!("Malformed probe payload: {}", e)))?;

        tracing::debug!(
            "Extracted signals for {}: {} words, load {}ms",
            url,
            raw.word_count,
            raw.load_time_ms
        );

        Ok(raw.into())
    }
}

impl Default for PageProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalExtractor for PageProbe {
    async fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> pagepulse_core::Result<PageSignals> {
        self.probe(url, timeout)
            .await
            .map_err(|e| pagepulse_core::Error::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}
