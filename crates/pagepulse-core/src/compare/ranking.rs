use crate::report::{AnalysisResult, ComparisonResult};
use std::collections::BTreeMap;

/// Scoring dimensions a compared page can win.
const WINNER_CATEGORIES: [&str; 9] = [
    "overall",
    "cro_score",
    "performance",
    "title",
    "meta_description",
    "h1_tags",
    "ctas",
    "forms",
    "content",
];

/// Orders successful analyses and picks category winners.
///
/// Results arrive keyed by their original input index; all ties (rank
/// order and winners alike) break toward the lower index so the outcome
/// never depends on completion timing.
pub struct RankingEngine;

impl RankingEngine {
    /// Sort by combined score descending, assign dense 1-based ranks, and
    /// select the winning URL for every category.
    pub fn rank(
        results: Vec<(usize, AnalysisResult)>,
    ) -> (Vec<ComparisonResult>, BTreeMap<String, String>) {
        let mut ordered = results;
        ordered.sort_by(|(index_a, a), (index_b, b)| {
            b.combined_score()
                .cmp(&a.combined_score())
                .then(index_a.cmp(index_b))
        });

        let winners = Self::winners(&ordered);

        let ranked = ordered
            .into_iter()
            .enumerate()
            .map(|(position, (_, analysis))| ComparisonResult {
                rank: position + 1,
                analysis,
            })
            .collect();

        (ranked, winners)
    }

    fn winners(indexed: &[(usize, AnalysisResult)]) -> BTreeMap<String, String> {
        let mut winners = BTreeMap::new();
        for category in WINNER_CATEGORIES {
            // Input indexes are unique, so the reversed index comparison
            // makes the lower-index entry strictly greater on ties.
            let best = indexed.iter().max_by(|(index_a, a), (index_b, b)| {
                Self::category_value(a, category)
                    .cmp(&Self::category_value(b, category))
                    .then(index_b.cmp(index_a))
            });
            if let Some((_, result)) = best {
                winners.insert(category.to_string(), result.url.clone());
            }
        }
        winners
    }

    fn category_value(result: &AnalysisResult, category: &str) -> u32 {
        match category {
            "overall" => result.combined_score(),
            "cro_score" => result.cro_score,
            "performance" => result.performance.performance_score,
            other => result.breakdown.category(other).unwrap_or(0),
        }
    }
}
