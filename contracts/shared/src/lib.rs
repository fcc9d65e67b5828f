#![no_std]
//! # Shared Election Contracts Library
//!
//! Reusable errors, constants, and validation helpers for the SecureVote
//! Soroban contracts.
//!
//! ## Modules
//!
//! - `errors` - Error codes, their kinds and reason text
//! - `constants` - Limits and ledger constants
//! - `validation` - Reusable validation helper functions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::validation::validate_name;
//! use shared::constants::MAX_PROPOSALS;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

// Re-export commonly used types
pub use errors::{ContractError, ErrorKind};
pub use validation::{
    safe_increment, validate_description, validate_index, validate_name, validate_owner,
    validate_proposal_names,
};
