/// Maximum points when all three components (load, DOM-ready, size) are
/// measurable.
const FULL_CEILING: u32 = 100;

/// Ceiling when transfer size is unknown: the 30-point size component is
/// excluded from both numerator and denominator and the remainder is
/// rescaled back to 0-100. No partial size credit is awarded.
const SIZE_UNKNOWN_CEILING: u32 = 70;

/// Converts load timing and transfer size into a 0-100 performance score.
///
/// A step function, not a curve: each component maps its input to a fixed
/// tier. Pure and deterministic.
pub struct PerformanceScorer;

impl PerformanceScorer {
    pub fn score(
        load_time_ms: u64,
        dom_ready_ms: u64,
        page_size_kb: Option<f64>,
    ) -> (u32, Vec<String>) {
        let mut points = 0u32;

        // Load time (40 points)
        points += match load_time_ms {
            ms if ms < 2000 => 40,
            ms if ms < 3000 => 30,
            ms if ms < 5000 => 20,
            ms if ms < 7000 => 10,
            _ => 0,
        };

        // DOM content loaded (30 points)
        points += match dom_ready_ms {
            ms if ms < 1000 => 30,
            ms if ms < 2000 => 20,
            ms if ms < 3000 => 10,
            _ => 0,
        };

        // Transfer size (30 points, skipped entirely when unknown)
        let ceiling = match page_size_kb {
            Some(kb) => {
                points += if kb < 500.0 {
                    30
                } else if kb < 1000.0 {
                    20
                } else if kb < 2000.0 {
                    10
                } else {
                    0
                };
                FULL_CEILING
            }
            None => SIZE_UNKNOWN_CEILING,
        };

        // Integer rescale with rounding to the nearest point.
        let score = (points * FULL_CEILING + ceiling / 2) / ceiling;

        let recommendations =
            Self::recommendations(load_time_ms, dom_ready_ms, page_size_kb, score);

        tracing::debug!("Performance score: {}", score);

        (score, recommendations)
    }

    fn recommendations(
        load_time_ms: u64,
        dom_ready_ms: u64,
        page_size_kb: Option<f64>,
        score: u32,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let load_s = load_time_ms as f64 / 1000.0;
        if load_time_ms >= 5000 {
            recommendations.push(format!(
                "Page load time is slow ({load_s:.2}s). Target: under 3s for optimal user experience."
            ));
        } else if load_time_ms >= 3000 {
            recommendations.push(format!(
                "Page load time is moderate ({load_s:.2}s). Consider optimization to get under 2s."
            ));
        }

        if dom_ready_ms >= 2000 {
            let dom_s = dom_ready_ms as f64 / 1000.0;
            recommendations.push(format!(
                "DOM content loaded time is high ({dom_s:.2}s). Optimize the critical rendering path."
            ));
        }

        if let Some(kb) = page_size_kb {
            if kb >= 2000.0 {
                recommendations.push(format!(
                    "Page size is large ({kb:.0}KB). Compress images, minify CSS/JS, and use lazy loading."
                ));
            } else if kb >= 1000.0 {
                recommendations.push(format!(
                    "Page size is moderate ({kb:.0}KB). Consider additional optimization."
                ));
            }
        }

        if score < 50 {
            recommendations.push(
                "Critical: implement a CDN, enable compression, optimize images, and minimize render-blocking resources."
                    .to_string(),
            );
        } else if score < 75 {
            recommendations.push(
                "Consider browser caching, code splitting, and async loading of non-critical resources."
                    .to_string(),
            );
        } else {
            recommendations
                .push("Great performance. Maintain current optimization practices.".to_string());
        }

        recommendations
    }
}
