use crate::error::TargetFailure;
use crate::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timing and payload metrics for one page, with the derived score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub load_time_ms: u64,
    pub dom_ready_ms: u64,
    pub page_size_kb: Option<f64>,
    pub performance_score: u32,
}

/// The full outcome of analyzing one URL. Produced once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub cro_score: u32,
    pub breakdown: ScoreBreakdown,
    pub performance: PerformanceMetrics,
    /// CRO recommendations first, performance recommendations appended.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// CRO plus performance score, the 0-200 overall ranking key.
    pub fn combined_score(&self) -> u32 {
        self.cro_score + self.performance.performance_score
    }
}

/// An [`AnalysisResult`] placed in a comparison, with its dense rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub rank: usize,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// The outcome of comparing a batch of URLs. Built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonAnalysis {
    /// RFC 3339 timestamp of when the comparison finished.
    pub generated_at: String,
    /// Number of URLs that were successfully analyzed.
    pub total_analyzed: usize,
    /// Results in rank order (rank 1 first).
    pub results: Vec<ComparisonResult>,
    /// Category name to the URL that won it.
    pub winners: BTreeMap<String, String>,
    pub insights: Vec<String>,
    /// Targets that failed, with reasons. Empty on full success.
    pub failures: Vec<TargetFailure>,
}
