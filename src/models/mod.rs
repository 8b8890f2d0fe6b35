//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod compile;
pub mod contest;
pub mod standings;
pub mod user;
pub mod verdict;

pub use compile::*;
pub use contest::*;
pub use standings::*;
pub use user::*;
pub use verdict::*;
