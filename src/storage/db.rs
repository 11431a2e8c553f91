use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::program::Category;
use crate::storage::models::{Review, ReviewDraft, ReviewSource};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                rating INTEGER NOT NULL,
                content TEXT NOT NULL,
                category TEXT NOT NULL,
                points_amount TEXT,
                calculated_value TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_reviews_created ON reviews(created_at)",
            [],
        )?;

        Ok(())
    }

    pub fn insert_review(&self, draft: &ReviewDraft) -> Result<Review> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO reviews
             (name, rating, content, category, points_amount, calculated_value, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.name,
                draft.rating as i64,
                draft.content,
                draft.category.to_string(),
                draft.points_amount,
                draft.calculated_value,
                created_at.to_rfc3339(),
            ],
        )?;

        Ok(Review {
            id: self.conn.last_insert_rowid(),
            name: draft.name.clone(),
            rating: draft.rating,
            content: draft.content.clone(),
            category: draft.category,
            points_amount: draft.points_amount.clone(),
            calculated_value: draft.calculated_value.clone(),
            created_at,
            source: ReviewSource::Submitted,
        })
    }

    /// All persisted reviews, newest first. Rows that fail to decode are
    /// dropped rather than failing the whole read.
    pub fn submitted_reviews(&self) -> Result<Vec<Review>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, rating, content, category, points_amount, calculated_value, created_at
             FROM reviews
             ORDER BY created_at DESC, id DESC",
        )?;

        let reviews = stmt
            .query_map([], decode_row)?
            .filter_map(|row| match row {
                Ok(Some(review)) => Some(review),
                Ok(None) => None,
                Err(e) => {
                    debug!("Skipping unreadable review row: {}", e);
                    None
                }
            })
            .collect();

        Ok(reviews)
    }

    pub fn remove_review(&self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn clear_reviews(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM reviews", [])?;
        Ok(deleted)
    }

    pub fn count_submitted_since(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM reviews WHERE created_at >= ?1",
            params![cutoff.to_rfc3339()],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn get_stats(&self) -> Result<StoreStats> {
        let total_reviews: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;

        let average_rating: Option<f64> =
            self.conn
                .query_row("SELECT AVG(rating) FROM reviews", [], |row| row.get(0))?;

        let count_for = |category: &str| -> Result<usize> {
            let count: i64 = self.conn.query_row(
                "SELECT COUNT(*) FROM reviews WHERE category = ?1",
                params![category],
                |row| row.get(0),
            )?;
            Ok(count as usize)
        };

        let today_start = start_of_today();
        let submitted_today = self.count_submitted_since(today_start)?;

        Ok(StoreStats {
            total_reviews: total_reviews as usize,
            submitted_today,
            average_rating: average_rating.unwrap_or(0.0),
            gaming: count_for("gaming")?,
            airline: count_for("airline")?,
            hotel: count_for("hotel")?,
            general: count_for("general")?,
        })
    }
}

/// Midnight UTC, the boundary for the daily submission cap.
pub fn start_of_today() -> DateTime<Utc> {
    Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}

/// Decode one row leniently: Ok(None) marks a malformed row the caller
/// should discard.
fn decode_row(row: &Row<'_>) -> rusqlite::Result<Option<Review>> {
    let rating: i64 = row.get(2)?;
    if !(1..=5).contains(&rating) {
        return Ok(None);
    }

    let category: Category = match row.get::<_, String>(4)?.parse() {
        Ok(category) => category,
        Err(_) => return Ok(None),
    };

    let created_at = match DateTime::parse_from_rfc3339(&row.get::<_, String>(7)?) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(_) => return Ok(None),
    };

    Ok(Some(Review {
        id: row.get(0)?,
        name: row.get(1)?,
        rating: rating as u8,
        content: row.get(3)?,
        category,
        points_amount: row.get(5)?,
        calculated_value: row.get(6)?,
        created_at,
        source: ReviewSource::Submitted,
    }))
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_reviews: usize,
    pub submitted_today: usize,
    pub average_rating: f64,
    pub gaming: usize,
    pub airline: usize,
    pub hotel: usize,
    pub general: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        (db, dir)
    }

    fn draft(name: &str, content: &str) -> ReviewDraft {
        ReviewDraft {
            name: name.to_string(),
            rating: 5,
            content: content.to_string(),
            category: Category::Gaming,
            points_amount: Some("50,000 Steam points".to_string()),
            calculated_value: Some("$500.00".to_string()),
        }
    }

    #[test]
    fn test_insert_and_list_newest_first() {
        let (db, _dir) = open_test_db();

        let first = db.insert_review(&draft("Alex", "First review with enough text")).unwrap();
        let second = db.insert_review(&draft("Sam", "Second review with enough text")).unwrap();

        let reviews = db.submitted_reviews().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, second.id);
        assert_eq!(reviews[1].id, first.id);
        assert_eq!(reviews[0].source, ReviewSource::Submitted);
    }

    #[test]
    fn test_remove_and_clear() {
        let (db, _dir) = open_test_db();

        let review = db.insert_review(&draft("Alex", "A review worth removing")).unwrap();
        db.insert_review(&draft("Sam", "Another review entirely")).unwrap();

        assert!(db.remove_review(review.id).unwrap());
        assert!(!db.remove_review(review.id).unwrap());
        assert_eq!(db.submitted_reviews().unwrap().len(), 1);

        assert_eq!(db.clear_reviews().unwrap(), 1);
        assert!(db.submitted_reviews().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_rows_are_discarded() {
        let (db, _dir) = open_test_db();
        db.insert_review(&draft("Alex", "The only healthy row here")).unwrap();

        // Corrupt rows written behind the store's back must not break reads.
        db.conn
            .execute(
                "INSERT INTO reviews (name, rating, content, category, points_amount, calculated_value, created_at)
                 VALUES ('Bad', 9, 'rating out of range', 'gaming', NULL, NULL, ?1)",
                params![Utc::now().to_rfc3339()],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO reviews (name, rating, content, category, points_amount, calculated_value, created_at)
                 VALUES ('Bad', 4, 'unknown category', 'cruise', NULL, NULL, ?1)",
                params![Utc::now().to_rfc3339()],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO reviews (name, rating, content, category, points_amount, calculated_value, created_at)
                 VALUES ('Bad', 4, 'broken timestamp', 'hotel', NULL, NULL, 'yesterday-ish')",
                [],
            )
            .unwrap();

        let reviews = db.submitted_reviews().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name, "Alex");
    }

    #[test]
    fn test_daily_count_and_stats() {
        let (db, _dir) = open_test_db();
        db.insert_review(&draft("Alex", "Submitted just moments ago")).unwrap();
        let mut hotel = draft("Sam", "A hotel-category submission");
        hotel.category = Category::Hotel;
        hotel.rating = 3;
        db.insert_review(&hotel).unwrap();

        assert_eq!(db.count_submitted_since(start_of_today()).unwrap(), 2);

        let stats = db.get_stats().unwrap();
        assert_eq!(stats.total_reviews, 2);
        assert_eq!(stats.submitted_today, 2);
        assert_eq!(stats.gaming, 1);
        assert_eq!(stats.hotel, 1);
        assert!((stats.average_rating - 4.0).abs() < f64::EPSILON);
    }
}
