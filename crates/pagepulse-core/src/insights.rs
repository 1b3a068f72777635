use crate::report::ComparisonResult;

/// Combined-score spread above which the weaker pages are told to
/// benchmark against the leader.
const WIDE_GAP: u32 = 40;

/// Derives aggregate statistics and human-readable findings from a ranked
/// comparison. A pure reduction over the final result sequence; no state
/// is accumulated while analyses are in flight.
pub struct InsightGenerator;

impl InsightGenerator {
    /// Insight order is fixed: summary averages, top performer, score
    /// gap, then the gap-keyed recommendation.
    pub fn generate(ranked: &[ComparisonResult]) -> Vec<String> {
        if ranked.is_empty() {
            return Vec::new();
        }

        tracing::debug!("Generating insights for {} ranked results", ranked.len());

        let count = ranked.len() as f64;
        let average_cro = (ranked.iter().map(|r| r.analysis.cro_score).sum::<u32>() as f64
            / count)
            .round() as u32;
        let average_performance = (ranked
            .iter()
            .map(|r| r.analysis.performance.performance_score)
            .sum::<u32>() as f64
            / count)
            .round() as u32;

        let mut insights = Vec::with_capacity(4);
        insights.push(format!(
            "Across {} pages, the average CRO score is {}/100 and the average performance score is {}/100.",
            ranked.len(),
            average_cro,
            average_performance
        ));

        // ranked is in rank order, but derive the extremes as a reduction
        // rather than trusting position
        let max = ranked
            .iter()
            .map(|r| r.analysis.combined_score())
            .max()
            .unwrap_or(0);
        let min = ranked
            .iter()
            .map(|r| r.analysis.combined_score())
            .min()
            .unwrap_or(0);
        let gap = max - min;

        let top = &ranked[0];
        insights.push(format!(
            "{} leads the comparison with a combined score of {}/200.",
            top.analysis.url,
            top.analysis.combined_score()
        ));

        insights.push(format!(
            "The gap between the strongest and weakest page is {} combined points.",
            gap
        ));

        if gap > WIDE_GAP {
            insights.push(format!(
                "Lower-ranked pages should benchmark against {} to close the gap.",
                top.analysis.url
            ));
        } else {
            insights.push(
                "Scores are closely matched; small optimizations could reshuffle the ranking."
                    .to_string(),
            );
        }

        insights
    }
}
