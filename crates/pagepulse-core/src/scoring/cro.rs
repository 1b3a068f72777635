use super::ScoreBreakdown;
use crate::signals::PageSignals;

/// Words of visible text below which a page is considered thin.
const MIN_CONTENT_WORDS: usize = 300;

/// Converts page signals into a 0-100 conversion-optimization score.
///
/// Pure and deterministic: the same signals always produce the same
/// breakdown and the same recommendation list. Every missed sub-bonus
/// emits exactly one recommendation, so the list is empty only at a
/// perfect score.
pub struct CroScorer;

impl CroScorer {
    pub fn score(signals: &PageSignals) -> (ScoreBreakdown, Vec<String>) {
        tracing::debug!("Scoring CRO signals");

        let mut breakdown = ScoreBreakdown::default();
        let mut recommendations = Vec::new();

        // Title quality (20 points)
        match signals.title.as_deref().filter(|t| !t.is_empty()) {
            Some(title) => {
                breakdown.title += 10;
                let length = title.chars().count();
                if (30..=60).contains(&length) {
                    breakdown.title += 10;
                } else if length < 30 {
                    recommendations.push(format!(
                        "Title is too short ({length} characters). Recommended: 30-60 characters for better SEO."
                    ));
                } else {
                    recommendations.push(format!(
                        "Title is too long ({length} characters). Recommended: 30-60 characters for better SEO."
                    ));
                }
            }
            None => recommendations.push(
                "Add a title tag to your page for better SEO and user experience.".to_string(),
            ),
        }

        // Meta description (15 points)
        match signals.meta_description.as_deref().filter(|m| !m.is_empty()) {
            Some(meta) => {
                breakdown.meta_description += 10;
                let length = meta.chars().count();
                if (120..=160).contains(&length) {
                    breakdown.meta_description += 5;
                } else if length < 120 {
                    recommendations.push(format!(
                        "Meta description is too short ({length} characters). Recommended: 120-160 characters."
                    ));
                } else {
                    recommendations.push(format!(
                        "Meta description is too long ({length} characters). Recommended: 120-160 characters."
                    ));
                }
            }
            None => recommendations.push(
                "Add a meta description to improve search engine results and click-through rates."
                    .to_string(),
            ),
        }

        // H1 tags (15 points); multiple H1s forfeit the single-heading bonus
        if signals.h1_count >= 1 {
            breakdown.h1_tags += 10;
            if signals.h1_count == 1 {
                breakdown.h1_tags += 5;
            } else {
                recommendations.push(format!(
                    "Multiple H1 tags detected ({}). Stick to one H1 tag for better SEO.",
                    signals.h1_count
                ));
            }
        } else {
            recommendations
                .push("Add an H1 tag to clearly define your page's main heading.".to_string());
        }

        // Call-to-action elements (25 points)
        if signals.cta_count >= 1 {
            breakdown.ctas += 15;
            if signals.cta_count >= 2 {
                breakdown.ctas += 10;
            } else {
                recommendations.push(
                    "Consider adding more CTA buttons to increase conversion opportunities (currently: 1)."
                        .to_string(),
                );
            }
        } else {
            recommendations.push(
                "Add clear call-to-action buttons to guide users toward conversion.".to_string(),
            );
        }

        // Forms (15 points)
        if signals.form_count >= 1 {
            breakdown.forms += 15;
        } else {
            recommendations.push(
                "Consider adding a form to capture leads or enable user interaction.".to_string(),
            );
        }

        // Content length (10 points)
        if signals.word_count > MIN_CONTENT_WORDS {
            breakdown.content += 10;
        } else {
            recommendations.push(format!(
                "Add more content to your page (current: {} words, recommended: {}+ words).",
                signals.word_count, MIN_CONTENT_WORDS
            ));
        }

        tracing::debug!("CRO score: {}", breakdown.total());

        (breakdown, recommendations)
    }
}
