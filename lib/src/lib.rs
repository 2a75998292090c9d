pub mod api;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod generation;
pub mod models;
pub mod search;
pub mod statistics;
pub mod top_students;

pub use api::{HttpScoresClient, ScoresApi};
pub use catalog::{Block, ScoreLevel};
pub use error::{ApiError, FilterAxis};
