pub mod board;
pub mod showcase;
pub mod validate;

pub use board::{ReviewBoard, ReviewStore};
pub use showcase::showcase_reviews;
