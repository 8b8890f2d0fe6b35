//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SCORING DEFAULTS
// =============================================================================

/// Penalty per failed attempt before the first accepted run in ACM mode (in minutes)
pub const DEFAULT_ACM_PENALTY_MINUTES: i64 = 20;

/// Extra percent credited to runs submitted before the checkpoint
pub const DEFAULT_CHECKPOINT_BONUS_PERCENT: i64 = 0;

/// Percent of the awarded score credited to runs at or after the checkpoint
pub const DEFAULT_POST_CHECKPOINT_PERCENT: i64 = 50;

/// Score credited to a passing verdict that carries no explicit score
pub const DEFAULT_TASK_POINTS: i64 = 100;

/// Upper bound for the ACM penalty per failure (one day, in minutes)
pub const MAX_ACM_PENALTY_MINUTES: i64 = 1440;

/// Upper bound for the pre-checkpoint bonus percent
pub const MAX_CHECKPOINT_BONUS_PERCENT: i64 = 1000;

/// Upper bound for the score of a passing verdict without an explicit score
pub const MAX_TASK_POINTS: i64 = 1_000_000;

// =============================================================================
// CONTEST SETTINGS
// =============================================================================

/// Rule system tags, as stored and as sent over the wire
pub mod rule_systems {
    pub const ACM: &str = "acm";
    pub const POINTS: &str = "points";
    pub const CHECKPOINT: &str = "checkpoint";

    /// All supported rule systems
    pub const ALL: &[&str] = &[ACM, POINTS, CHECKPOINT];
}

/// Maximum contest name length
pub const MAX_CONTEST_NAME_LENGTH: u64 = 256;

/// Maximum length of a contest-local task label
pub const MAX_TASK_LABEL_LENGTH: usize = 16;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;
