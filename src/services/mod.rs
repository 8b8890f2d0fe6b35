//! Business logic services

pub mod contest_service;
pub mod standings;
pub mod task_sync;

pub use contest_service::ContestService;
pub use standings::{build_result, convert_standings};
pub use task_sync::{TaskAssignment, TaskChanges};
