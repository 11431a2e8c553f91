use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::program::Category;

/// A published review, either user-submitted (persisted) or one of the
/// built-in showcase entries shipped with the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub rating: u8,
    pub content: String,
    pub category: Category,
    pub points_amount: Option<String>,
    pub calculated_value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub source: ReviewSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewSource {
    Submitted,
    Showcase,
}

impl Review {
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// What the submission form collects. Validated before it ever reaches a
/// store.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    pub content: String,
    pub category: Category,
    pub points_amount: Option<String>,
    pub calculated_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_rendering() {
        let review = Review {
            id: 1,
            name: "Alex".to_string(),
            rating: 4,
            content: "Great calculator overall".to_string(),
            category: Category::Gaming,
            points_amount: None,
            calculated_value: None,
            created_at: Utc::now(),
            source: ReviewSource::Submitted,
        };
        assert_eq!(review.stars(), "★★★★☆");
    }
}
