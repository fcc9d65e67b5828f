//! Common constants used across election contracts
//!
//! Limits here bound the size of a single `Election` ledger entry so that
//! reading or rewriting it stays well inside the per-invocation budget.

// ===== Election Limits =====

/// Maximum number of proposals in one election
pub const MAX_PROPOSALS: u32 = 64;

/// Maximum length of an election or proposal name, in bytes
pub const MAX_NAME_LENGTH: u32 = 64;

/// Maximum length of an election description, in bytes
pub const MAX_DESCRIPTION_LENGTH: u32 = 512;

/// Minimum number of proposals in one election
pub const MIN_PROPOSALS: u32 = 1;

// ===== Ledger Constants =====

/// Approximate ledger close time in seconds
pub const LEDGER_CLOSE_SECONDS: u32 = 5;

/// Ledgers in roughly one day
pub const LEDGERS_PER_DAY: u32 = 86_400 / LEDGER_CLOSE_SECONDS;

/// Ledgers in roughly one year
pub const LEDGERS_PER_YEAR: u32 = 365 * LEDGERS_PER_DAY;
