//! Common error types for election contracts
//!
//! This module defines the error codes returned by the election registry so
//! that clients and indexers can map a failed invocation back to a reason.

use soroban_sdk::contracterror;

/// Error type for the election registry
///
/// Every failure has a unique code. Error ranges are organized by category:
/// - 1-9: Initialization/input errors
/// - 10-19: Authorization errors
/// - 20-29: Lookup errors
/// - 30-39: Eligibility and double-vote errors
/// - 40-49: Lifecycle errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== Initialization/Input Errors (1-9) =====
    /// Registry has no owner yet
    NotInitialized = 1,

    /// Owner was already set
    AlreadyInitialized = 2,

    /// Invalid input provided
    InvalidInput = 3,

    /// Arithmetic overflow occurred
    Overflow = 4,

    // ===== Authorization Errors (10-19) =====
    /// Non-owner tried to create an election
    NotOwner = 10,

    /// Non-owner tried to grant a right to vote
    NotChairpersonToGrant = 11,

    /// Non-owner tried to end a voting session
    NotChairpersonToEnd = 12,

    // ===== Lookup Errors (20-29) =====
    /// Election index does not exist
    ElectionNotFound = 20,

    /// Proposal index does not exist within the election
    ProposalOutOfRange = 21,

    // ===== Eligibility Errors (30-39) =====
    /// Caller was never granted the right to vote
    NoRightToVote = 30,

    /// Target voter already voted, so a grant is pointless
    VoterAlreadyVoted = 31,

    /// Caller already voted
    AlreadyVoted = 32,

    /// Right to vote was already granted
    AlreadyGranted = 33,

    // ===== Lifecycle Errors (40-49) =====
    /// Election is closed
    VotingEnded = 40,
}

/// Coarse classification of a [`ContractError`].
///
/// Several codes share a kind when they only differ in the reason text, e.g.
/// the three owner-only operations all fail as `Unauthorized`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    OutOfRange,
    Ineligible,
    AlreadyVoted,
    AlreadyGranted,
    VotingClosed,
    InvalidInput,
    Overflow,
    NotInitialized,
    AlreadyInitialized,
}

impl ContractError {
    /// Get the kind this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::NotInitialized => ErrorKind::NotInitialized,
            ContractError::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            ContractError::InvalidInput => ErrorKind::InvalidInput,
            ContractError::Overflow => ErrorKind::Overflow,

            ContractError::NotOwner
            | ContractError::NotChairpersonToGrant
            | ContractError::NotChairpersonToEnd => ErrorKind::Unauthorized,

            ContractError::ElectionNotFound => ErrorKind::NotFound,
            ContractError::ProposalOutOfRange => ErrorKind::OutOfRange,

            ContractError::NoRightToVote => ErrorKind::Ineligible,
            ContractError::VoterAlreadyVoted | ContractError::AlreadyVoted => {
                ErrorKind::AlreadyVoted
            }
            ContractError::AlreadyGranted => ErrorKind::AlreadyGranted,

            ContractError::VotingEnded => ErrorKind::VotingClosed,
        }
    }

    /// Get the human-readable reason, as shown to voters
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract not initialized",
            ContractError::AlreadyInitialized => "Contract already initialized",
            ContractError::InvalidInput => "Invalid input provided",
            ContractError::Overflow => "Arithmetic overflow",

            ContractError::NotOwner => "Not owner",
            ContractError::NotChairpersonToGrant => "Only chairperson can give right to vote.",
            ContractError::NotChairpersonToEnd => "Only Chairperson can end the voting session!",

            ContractError::ElectionNotFound => "Election not found",
            ContractError::ProposalOutOfRange => "Proposal index out of range",

            ContractError::NoRightToVote => "Has no right to vote.",
            ContractError::VoterAlreadyVoted => "The voter already voted.",
            ContractError::AlreadyVoted => "Already voted.",
            ContractError::AlreadyGranted => "Already given the right to vote.",

            ContractError::VotingEnded => "Voting ended.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::Overflow as u32, 4);
        assert_eq!(ContractError::NotOwner as u32, 10);
        assert_eq!(ContractError::ElectionNotFound as u32, 20);
        assert_eq!(ContractError::NoRightToVote as u32, 30);
        assert_eq!(ContractError::VotingEnded as u32, 40);
    }

    #[test]
    fn test_owner_only_errors_share_kind() {
        assert_eq!(ContractError::NotOwner.kind(), ErrorKind::Unauthorized);
        assert_eq!(ContractError::NotChairpersonToGrant.kind(), ErrorKind::Unauthorized);
        assert_eq!(ContractError::NotChairpersonToEnd.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_already_voted_variants_differ_in_message_only() {
        assert_eq!(ContractError::VoterAlreadyVoted.kind(), ErrorKind::AlreadyVoted);
        assert_eq!(ContractError::AlreadyVoted.kind(), ErrorKind::AlreadyVoted);
        assert_eq!(ContractError::VoterAlreadyVoted.message(), "The voter already voted.");
        assert_eq!(ContractError::AlreadyVoted.message(), "Already voted.");
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(
            ContractError::NotChairpersonToEnd.message(),
            "Only Chairperson can end the voting session!"
        );
        assert_eq!(ContractError::VotingEnded.message(), "Voting ended.");
        assert_eq!(ContractError::NoRightToVote.message(), "Has no right to vote.");
        assert_eq!(
            ContractError::AlreadyGranted.message(),
            "Already given the right to vote."
        );
    }
}
