use thiserror::Error;

use crate::storage::models::ReviewDraft;

pub const MIN_CONTENT_CHARS: usize = 10;
pub const MAX_CONTENT_CHARS: usize = 500;

/// Inline messages shown next to the form, worded the way the site worded
/// them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidationError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Please write at least {MIN_CONTENT_CHARS} characters")]
    ContentTooShort,

    #[error("Please keep your review under {MAX_CONTENT_CHARS} characters")]
    ContentTooLong,

    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}

/// Check a draft before it touches any store. Bounds are inclusive: content
/// of exactly 10 or exactly 500 characters passes.
pub fn validate(draft: &ReviewDraft) -> Result<(), ReviewValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ReviewValidationError::EmptyName);
    }

    let content_chars = draft.content.chars().count();
    if content_chars < MIN_CONTENT_CHARS {
        return Err(ReviewValidationError::ContentTooShort);
    }
    if content_chars > MAX_CONTENT_CHARS {
        return Err(ReviewValidationError::ContentTooLong);
    }

    if !(1..=5).contains(&draft.rating) {
        return Err(ReviewValidationError::InvalidRating);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Category;

    fn draft_with_content(content: &str) -> ReviewDraft {
        ReviewDraft {
            name: "Alex".to_string(),
            rating: 5,
            content: content.to_string(),
            category: Category::General,
            points_amount: None,
            calculated_value: None,
        }
    }

    #[test]
    fn test_content_length_boundaries() {
        assert_eq!(
            validate(&draft_with_content(&"x".repeat(9))),
            Err(ReviewValidationError::ContentTooShort)
        );
        assert!(validate(&draft_with_content(&"x".repeat(10))).is_ok());
        assert!(validate(&draft_with_content(&"x".repeat(500))).is_ok());
        assert_eq!(
            validate(&draft_with_content(&"x".repeat(501))),
            Err(ReviewValidationError::ContentTooLong)
        );
    }

    #[test]
    fn test_short_and_plausible_contents() {
        assert_eq!(
            validate(&draft_with_content("nope!")),
            Err(ReviewValidationError::ContentTooShort)
        );
        assert!(validate(&draft_with_content("Great little tool")).is_ok());
    }

    #[test]
    fn test_name_required() {
        let mut draft = draft_with_content("Perfectly fine content");
        draft.name = "   ".to_string();
        assert_eq!(validate(&draft), Err(ReviewValidationError::EmptyName));
    }

    #[test]
    fn test_rating_bounds() {
        let mut draft = draft_with_content("Perfectly fine content");
        draft.rating = 0;
        assert_eq!(validate(&draft), Err(ReviewValidationError::InvalidRating));
        draft.rating = 6;
        assert_eq!(validate(&draft), Err(ReviewValidationError::InvalidRating));
        for rating in 1..=5 {
            draft.rating = rating;
            assert!(validate(&draft).is_ok());
        }
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // Nine multibyte chars is still too short.
        assert_eq!(
            validate(&draft_with_content(&"é".repeat(9))),
            Err(ReviewValidationError::ContentTooShort)
        );
        assert!(validate(&draft_with_content(&"é".repeat(10))).is_ok());
    }
}
