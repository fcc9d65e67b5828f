#![no_std]

mod contract;
mod events;
mod storage;
mod tally;
mod types;

pub use contract::{SecureVote, SecureVoteClient};
pub use shared::{ContractError, ErrorKind};
pub use types::{DataKey, Election, ElectionStatus, ElectionSummary, Proposal, Voter};
