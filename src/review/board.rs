use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{Result, ValuatorError};
use crate::review::showcase::showcase_reviews;
use crate::review::validate;
use crate::storage::db::start_of_today;
use crate::storage::models::{Review, ReviewDraft};
use crate::storage::Database;

/// Persistence contract the board depends on. The board never cares whether
/// entries live in a local file database or somewhere else.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewStore {
    fn insert(&self, draft: &ReviewDraft) -> Result<Review>;
    fn submitted(&self) -> Result<Vec<Review>>;
    fn remove(&self, id: i64) -> Result<bool>;
    fn clear(&self) -> Result<usize>;
    fn count_since(&self, cutoff: DateTime<Utc>) -> Result<usize>;
}

impl ReviewStore for Database {
    fn insert(&self, draft: &ReviewDraft) -> Result<Review> {
        self.insert_review(draft)
    }

    fn submitted(&self) -> Result<Vec<Review>> {
        self.submitted_reviews()
    }

    fn remove(&self, id: i64) -> Result<bool> {
        self.remove_review(id)
    }

    fn clear(&self) -> Result<usize> {
        self.clear_reviews()
    }

    fn count_since(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        self.count_submitted_since(cutoff)
    }
}

pub struct ReviewBoard<S> {
    store: S,
    max_per_day: usize,
}

impl<S: ReviewStore> ReviewBoard<S> {
    pub fn new(store: S, max_per_day: usize) -> Self {
        Self { store, max_per_day }
    }

    /// Validate, enforce the daily cap, then persist.
    pub fn submit(&self, draft: ReviewDraft) -> Result<Review> {
        validate::validate(&draft)?;

        let submitted_today = self.store.count_since(start_of_today())?;
        if submitted_today >= self.max_per_day {
            debug!("Daily review cap hit: {}/{}", submitted_today, self.max_per_day);
            return Err(ValuatorError::DailyLimitReached(self.max_per_day));
        }

        let review = self.store.insert(&draft)?;
        info!("Review {} submitted by {}", review.id, review.name);
        Ok(review)
    }

    /// Submitted entries newest first, then the built-in showcase entries.
    /// A broken read path degrades to the showcase list alone.
    pub fn list(&self) -> Vec<Review> {
        let mut reviews = self.store.submitted().unwrap_or_else(|e| {
            debug!("Review read failed, treating as empty: {}", e);
            Vec::new()
        });
        reviews.extend(showcase_reviews());
        reviews
    }

    /// Remove a submitted entry. Showcase entries carry negative ids and are
    /// not removable.
    pub fn remove(&self, id: i64) -> Result<bool> {
        if id < 0 {
            return Ok(false);
        }
        self.store.remove(id)
    }

    pub fn clear(&self) -> Result<usize> {
        self.store.clear()
    }

    pub fn remaining_today(&self) -> Result<usize> {
        let submitted = self.store.count_since(start_of_today())?;
        Ok(self.max_per_day.saturating_sub(submitted))
    }
}
