use super::ranking::RankingEngine;
use crate::analyzer::SingleAnalyzer;
use crate::error::{Error, Result, TargetFailure};
use crate::insights::InsightGenerator;
use crate::report::ComparisonAnalysis;
use chrono::Utc;

pub const MIN_URLS: usize = 2;
pub const MAX_URLS: usize = 10;

/// Fans a [`SingleAnalyzer`] out over a batch of URLs, tolerates
/// per-target failures, and ranks the survivors.
///
/// All analyses run concurrently and settle at a single join point before
/// any aggregation happens, so no shared state exists between targets.
/// Dropping the returned future cancels outstanding fetches.
pub struct ComparisonOrchestrator {
    analyzer: SingleAnalyzer,
}

impl ComparisonOrchestrator {
    pub fn new(analyzer: SingleAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Compare 2-10 URLs. The count is validated before any fetch starts;
    /// a malformed URL inside the batch is a per-target failure instead.
    pub async fn compare(&self, urls: &[String]) -> Result<ComparisonAnalysis> {
        if urls.len() < MIN_URLS || urls.len() > MAX_URLS {
            return Err(Error::Validation(format!(
                "Expected between {} and {} URLs, got {}",
                MIN_URLS,
                MAX_URLS,
                urls.len()
            )));
        }

        tracing::info!("Comparing {} URLs", urls.len());

        // join_all returns outcomes in input order regardless of
        // completion order, which keys the tie-breaks downstream.
        let outcomes =
            futures::future::join_all(urls.iter().map(|url| self.analyzer.analyze(url))).await;

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for (index, (url, outcome)) in urls.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(result) => successes.push((index, result)),
                Err(err) => {
                    tracing::warn!("Analysis of {} failed: {}", url, err);
                    failures.push(TargetFailure {
                        url: url.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        if successes.is_empty() {
            return Err(Error::AllTargetsFailed(failures));
        }

        let total_analyzed = successes.len();
        let (results, winners) = RankingEngine::rank(successes);
        let insights = InsightGenerator::generate(&results);

        tracing::info!(
            "Comparison complete: {}/{} targets analyzed",
            total_analyzed,
            urls.len()
        );

        Ok(ComparisonAnalysis {
            generated_at: Utc::now().to_rfc3339(),
            total_analyzed,
            results,
            winners,
            insights,
            failures,
        })
    }
}
