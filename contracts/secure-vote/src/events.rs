//! Contract events for external indexers.
//!
//! Each event carries its election index as a topic so one election's
//! history can be filtered out of the ledger stream.

use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionCreated {
    #[topic]
    pub election_index: u32,
    pub name: String,
    pub proposal_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RightGranted {
    #[topic]
    pub election_index: u32,
    pub voter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    #[topic]
    pub election_index: u32,
    pub voter: Address,
    pub proposal_index: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingClosed {
    #[topic]
    pub election_index: u32,
    pub votes_cast: u32,
}

pub fn initialized(env: &Env, owner: &Address) {
    Initialized {
        owner: owner.clone(),
    }
    .publish(env);
}

pub fn election_created(env: &Env, index: u32, name: &String, proposal_count: u32) {
    ElectionCreated {
        election_index: index,
        name: name.clone(),
        proposal_count,
    }
    .publish(env);
}

pub fn right_granted(env: &Env, index: u32, voter: &Address) {
    RightGranted {
        election_index: index,
        voter: voter.clone(),
    }
    .publish(env);
}

pub fn vote_cast(env: &Env, index: u32, voter: &Address, proposal_index: u32) {
    VoteCast {
        election_index: index,
        voter: voter.clone(),
        proposal_index,
    }
    .publish(env);
}

pub fn voting_closed(env: &Env, index: u32, votes_cast: u32) {
    VotingClosed {
        election_index: index,
        votes_cast,
    }
    .publish(env);
}
