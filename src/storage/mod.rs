pub mod db;
pub mod models;

pub use db::{Database, StoreStats};
