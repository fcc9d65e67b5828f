use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle of an election. `Closed` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElectionStatus {
    Open,
    Closed,
}

/// A named option within an election
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: String,
    pub vote_count: u32,
}

/// One voting round, stored under `DataKey::Election(index)`
#[contracttype]
#[derive(Clone, Debug)]
pub struct Election {
    pub name: String,
    pub description: String,
    /// Fixed at creation, never empty
    pub proposals: Vec<Proposal>,
    pub status: ElectionStatus,
    /// Number of addresses granted the right to vote
    pub eligible_voters: u32,
    /// Number of accepted votes; equals the sum of all `vote_count`
    pub votes_cast: u32,
}

impl Election {
    pub fn is_open(&self) -> bool {
        self.status == ElectionStatus::Open
    }
}

/// Per-election record of one address. An absent entry reads as
/// `Voter::default()`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub has_right_to_vote: bool,
    pub has_voted: bool,
    /// Set together with `has_voted`
    pub voted_proposal: Option<u32>,
}

/// Read-only snapshot of an election returned by queries
#[contracttype]
#[derive(Clone, Debug)]
pub struct ElectionSummary {
    pub index: u32,
    pub name: String,
    pub description: String,
    pub is_open: bool,
    pub proposals: Vec<Proposal>,
    pub eligible_voters: u32,
    pub votes_cast: u32,
}

impl ElectionSummary {
    pub fn from_election(index: u32, election: &Election) -> Self {
        ElectionSummary {
            index,
            name: election.name.clone(),
            description: election.description.clone(),
            is_open: election.is_open(),
            proposals: election.proposals.clone(),
            eligible_voters: election.eligible_voters,
            votes_cast: election.votes_cast,
        }
    }
}

/// Storage keys
#[contracttype]
pub enum DataKey {
    Admin,
    ElectionCount,
    Election(u32),
    // (election_index, voter)
    Voter(u32, Address),
}
