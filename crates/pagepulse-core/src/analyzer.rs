use crate::error::{Error, Result};
use crate::report::{AnalysisResult, PerformanceMetrics};
use crate::scoring::{CroScorer, PerformanceScorer};
use crate::signals::SignalExtractor;
use std::sync::Arc;
use std::time::Duration;

/// Wall-clock budget for one page fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs the full per-URL pipeline: fetch signals, score CRO, score
/// performance, merge recommendations. This is the unit of concurrent
/// work in a comparison.
#[derive(Clone)]
pub struct SingleAnalyzer {
    extractor: Arc<dyn SignalExtractor>,
    timeout: Duration,
}

impl SingleAnalyzer {
    pub fn new(extractor: Arc<dyn SignalExtractor>) -> Self {
        Self {
            extractor,
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Override the fetch budget. Tests use short budgets.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyze one URL. Either the full result is produced or an error is
    /// returned; there are no partial results at this granularity.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        tracing::debug!("Analyzing {}", url);

        let signals = tokio::time::timeout(self.timeout, self.extractor.fetch(url, self.timeout))
            .await
            .map_err(|_| Error::Timeout {
                url: url.to_string(),
                budget_secs: self.timeout.as_secs(),
            })??;

        let (breakdown, mut recommendations) = CroScorer::score(&signals);
        let (performance_score, performance_recommendations) = PerformanceScorer::score(
            signals.load_time_ms,
            signals.dom_ready_ms,
            signals.page_size_kb,
        );
        recommendations.extend(performance_recommendations);

        tracing::info!(
            "Analyzed {}: cro={}, performance={}",
            url,
            breakdown.total(),
            performance_score
        );

        Ok(AnalysisResult {
            url: url.to_string(),
            cro_score: breakdown.total(),
            breakdown,
            performance: PerformanceMetrics {
                load_time_ms: signals.load_time_ms,
                dom_ready_ms: signals.dom_ready_ms,
                page_size_kb: signals.page_size_kb,
                performance_score,
            },
            recommendations,
        })
    }
}
