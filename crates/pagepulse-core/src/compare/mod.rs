mod orchestrator;
mod ranking;

pub use orchestrator::{ComparisonOrchestrator, MAX_URLS, MIN_URLS};
pub use ranking::RankingEngine;
