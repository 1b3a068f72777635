mod cro;
mod performance;

pub use cro::CroScorer;
pub use performance::PerformanceScorer;

use serde::{Deserialize, Serialize};

/// Per-category CRO points.
///
/// The categories and their maxima are fixed: title 20, meta description
/// 15, H1 tags 15, CTAs 25, forms 15, content 10 (100 total). The CRO
/// score is always the sum of these fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub title: u32,
    pub meta_description: u32,
    pub h1_tags: u32,
    pub ctas: u32,
    pub forms: u32,
    pub content: u32,
}

impl ScoreBreakdown {
    pub const CATEGORIES: [&'static str; 6] = [
        "title",
        "meta_description",
        "h1_tags",
        "ctas",
        "forms",
        "content",
    ];

    pub fn total(&self) -> u32 {
        self.title + self.meta_description + self.h1_tags + self.ctas + self.forms + self.content
    }

    /// Points earned in a named category. `None` for unknown names.
    pub fn category(&self, name: &str) -> Option<u32> {
        match name {
            "title" => Some(self.title),
            "meta_description" => Some(self.meta_description),
            "h1_tags" => Some(self.h1_tags),
            "ctas" => Some(self.ctas),
            "forms" => Some(self.forms),
            "content" => Some(self.content),
            _ => None,
        }
    }

    /// Fixed maximum for a named category. `None` for unknown names.
    pub fn category_max(name: &str) -> Option<u32> {
        match name {
            "title" => Some(20),
            "meta_description" => Some(15),
            "h1_tags" => Some(15),
            "ctas" => Some(25),
            "forms" => Some(15),
            "content" => Some(10),
            _ => None,
        }
    }
}
