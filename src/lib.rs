//! ContestJudge - Contest Scoring & Standings Service
//!
//! This library turns judged submissions into per-contest standings under
//! several competing rule systems, and serves them over HTTP.
//!
//! # Features
//!
//! - ACM ranking (solved count, then penalty time)
//! - Points ranking (best score per task)
//! - CheckPoint ranking (best score, credited around a checkpoint time)
//! - Contest status classification (planned, running, completed)
//! - Contest editing with task list diffing
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Orchestration and standings aggregation
//! - **Scoring**: Pure rule converters, no I/O
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scoring;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
