//! Validation helper utilities for election contracts
//!
//! Input checks shared by every entry point that accepts user-supplied text.

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_PROPOSALS, MIN_PROPOSALS};
use crate::errors::ContractError;
use soroban_sdk::{Address, String, Vec};

// ===== Identity Validation =====

/// Validate that `caller` is the registry owner
///
/// `denied` is returned on mismatch, so each operation can report its own
/// reason text.
pub fn validate_owner(
    owner: &Address,
    caller: &Address,
    denied: ContractError,
) -> Result<(), ContractError> {
    if owner != caller {
        return Err(denied);
    }
    Ok(())
}

// ===== Text Validation =====

/// Validate that a name is non-empty and within bounds
pub fn validate_name(name: &String) -> Result<(), ContractError> {
    if name.len() == 0 || name.len() > MAX_NAME_LENGTH {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate description length; an empty description is allowed
pub fn validate_description(description: &String) -> Result<(), ContractError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// Validate the proposal list of a new election
///
/// Duplicate names are accepted and stay distinct entries.
pub fn validate_proposal_names(names: &Vec<String>) -> Result<(), ContractError> {
    if names.len() < MIN_PROPOSALS || names.len() > MAX_PROPOSALS {
        return Err(ContractError::InvalidInput);
    }
    for name in names.iter() {
        validate_name(&name)?;
    }
    Ok(())
}

// ===== Index Validation =====

/// Validate that `index` addresses an element of a collection of length `len`
pub fn validate_index(index: u32, len: u32, missing: ContractError) -> Result<(), ContractError> {
    if index >= len {
        return Err(missing);
    }
    Ok(())
}

// ===== Arithmetic Helpers =====

/// Safe increment for counters
pub fn safe_increment(value: u32) -> Result<u32, ContractError> {
    value.checked_add(1).ok_or(ContractError::Overflow)
}
