use chrono::{TimeZone, Utc};

use crate::program::Category;
use crate::storage::models::{Review, ReviewSource};

/// The six built-in entries shown under every user-submitted review. They
/// are never persisted and cannot be deleted.
pub fn showcase_reviews() -> Vec<Review> {
    vec![
        seeded(
            -1,
            "Alex Chen",
            5,
            "This calculator saved me so much time! I had 50,000 Steam points and was \
             wondering if I should redeem them for games or keep saving. The calculation \
             showed me exactly what they're worth. Ended up getting a great deal on a new game!",
            Category::Gaming,
            Some("50,000 Steam points"),
            Some("$500 USD"),
            (2024, 1, 15),
        ),
        seeded(
            -2,
            "Sarah Johnson",
            5,
            "As a frequent flyer, I've been using this tool to track my airline miles value. \
             The United Airlines calculator is spot-on and helped me decide between using miles \
             for a business class upgrade or saving them for a future trip.",
            Category::Airline,
            Some("75,000 United miles"),
            Some("$1,125 USD"),
            (2024, 1, 12),
        ),
        seeded(
            -3,
            "Mike Rodriguez",
            5,
            "The Marriott points calculator is incredibly accurate. I was able to compare the \
             value of using points vs paying cash for my hotel stay. The tool made it clear \
             that using points was the better choice this time.",
            Category::Hotel,
            Some("25,000 Marriott points"),
            Some("$200 USD"),
            (2024, 1, 10),
        ),
        seeded(
            -4,
            "Emily Davis",
            5,
            "Love how comprehensive this platform is! I can calculate everything from \
             PlayStation points to hotel rewards in one place. The multi-currency support is \
             fantastic for international travelers like me.",
            Category::General,
            None,
            None,
            (2024, 1, 8),
        ),
        seeded(
            -5,
            "David Kim",
            5,
            "Finally found a reliable Steam points calculator! The exchange rates are \
             up-to-date and the interface is so clean. Helped me realize my Steam points were \
             worth more than I thought.",
            Category::Gaming,
            Some("12,000 Steam points"),
            Some("$120 USD"),
            (2024, 1, 5),
        ),
        seeded(
            -6,
            "Lisa Thompson",
            5,
            "The Delta calculator helped me maximize my miles value. I was about to book a \
             domestic flight with cash, but the calculator showed me I could get much better \
             value using miles for an international trip instead.",
            Category::Airline,
            Some("60,000 Delta miles"),
            Some("$900 USD"),
            (2024, 1, 3),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: i64,
    name: &str,
    rating: u8,
    content: &str,
    category: Category,
    points_amount: Option<&str>,
    calculated_value: Option<&str>,
    date: (i32, u32, u32),
) -> Review {
    Review {
        id,
        name: name.to_string(),
        rating,
        content: content.to_string(),
        category,
        points_amount: points_amount.map(str::to_string),
        calculated_value: calculated_value.map(str::to_string),
        created_at: Utc
            .with_ymd_and_hms(date.0, date.1, date.2, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
        source: ReviewSource::Showcase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_entries_are_well_formed() {
        let entries = showcase_reviews();
        assert_eq!(entries.len(), 6);
        for entry in &entries {
            assert_eq!(entry.source, ReviewSource::Showcase);
            assert!(entry.id < 0, "showcase ids stay clear of db rowids");
            assert!(crate::review::validate::validate(&to_draft(entry)).is_ok());
        }
    }

    #[test]
    fn test_showcase_is_newest_first() {
        let entries = showcase_reviews();
        for pair in entries.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    fn to_draft(review: &Review) -> crate::storage::models::ReviewDraft {
        crate::storage::models::ReviewDraft {
            name: review.name.clone(),
            rating: review.rating,
            content: review.content.clone(),
            category: review.category,
            points_amount: review.points_amount.clone(),
            calculated_value: review.calculated_value.clone(),
        }
    }
}
