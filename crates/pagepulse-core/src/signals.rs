use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw signals extracted from a rendered page.
///
/// Captured once by a [`SignalExtractor`] and never mutated afterwards;
/// the scorers are pure functions over these values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSignals {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_count: usize,
    pub cta_count: usize,
    pub form_count: usize,
    /// Visible text length in words (the canonical content-length unit).
    pub word_count: usize,
    pub load_time_ms: u64,
    pub dom_ready_ms: u64,
    /// Transferred size in KB; `None` when the browser cannot report it.
    pub page_size_kb: Option<f64>,
}

/// Contract for the external page fetcher.
///
/// Implementations drive a real browser (see `pagepulse-browser`); tests
/// substitute scripted extractors.
#[async_trait]
pub trait SignalExtractor: Send + Sync {
    /// Fetch `url` and extract its signals, spending at most `timeout` on
    /// navigation. Failures surface as [`Error::Fetch`](crate::Error::Fetch).
    async fn fetch(&self, url: &str, timeout: Duration) -> crate::Result<PageSignals>;
}
