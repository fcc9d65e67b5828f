use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use shared::{
    safe_increment, validate_description, validate_index, validate_name, validate_owner,
    validate_proposal_names, ContractError,
};

use crate::{
    events, storage, tally,
    types::{Election, ElectionStatus, ElectionSummary, Proposal, Voter},
};

#[contract]
pub struct SecureVote;

fn require_owner(env: &Env, caller: &Address, denied: ContractError) -> Result<(), ContractError> {
    caller.require_auth();
    let owner = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    validate_owner(&owner, caller, denied)
}

fn load_election(env: &Env, index: u32) -> Result<Election, ContractError> {
    validate_index(index, storage::get_election_count(env), ContractError::ElectionNotFound)?;
    storage::get_election(env, index).ok_or(ContractError::ElectionNotFound)
}

#[contractimpl]
impl SecureVote {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Set the registry owner. Can only be called once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_admin(&env, &owner);

        events::initialized(&env, &owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Administration ───────────────────────────────────────────────────────

    /// Append a new open election and return its index.
    ///
    /// Proposals keep the order of `proposal_names`; repeated names become
    /// separate proposals.
    pub fn create_new_election(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        proposal_names: Vec<String>,
    ) -> Result<u32, ContractError> {
        require_owner(&env, &caller, ContractError::NotOwner)?;

        validate_name(&name)?;
        validate_description(&description)?;
        validate_proposal_names(&proposal_names)?;

        let mut proposals = Vec::new(&env);
        for proposal_name in proposal_names.iter() {
            proposals.push_back(Proposal {
                name: proposal_name,
                vote_count: 0,
            });
        }

        let index = storage::get_election_count(&env);
        let next_count = safe_increment(index)?;

        let election = Election {
            name,
            description,
            proposals,
            status: ElectionStatus::Open,
            eligible_voters: 0,
            votes_cast: 0,
        };

        storage::save_election(&env, index, &election);
        storage::set_election_count(&env, next_count);

        events::election_created(&env, index, &election.name, election.proposals.len());
        Ok(index)
    }

    /// Grant `voter` the right to vote in one election.
    ///
    /// Works on closed elections too; only `give_vote` checks the status.
    pub fn give_right_to_vote(
        env: Env,
        caller: Address,
        election_index: u32,
        voter: Address,
    ) -> Result<(), ContractError> {
        require_owner(&env, &caller, ContractError::NotChairpersonToGrant)?;

        let mut election = load_election(&env, election_index)?;
        let mut record = storage::get_voter(&env, election_index, &voter);

        if record.has_voted {
            return Err(ContractError::VoterAlreadyVoted);
        }
        if record.has_right_to_vote {
            return Err(ContractError::AlreadyGranted);
        }

        election.eligible_voters = safe_increment(election.eligible_voters)?;
        record.has_right_to_vote = true;

        storage::save_voter(&env, election_index, &voter, &record);
        storage::save_election(&env, election_index, &election);

        events::right_granted(&env, election_index, &voter);
        Ok(())
    }

    /// Close an election. Closing a closed election does nothing.
    pub fn ending_voting(env: Env, caller: Address, election_index: u32) -> Result<(), ContractError> {
        require_owner(&env, &caller, ContractError::NotChairpersonToEnd)?;

        let mut election = load_election(&env, election_index)?;
        if !election.is_open() {
            return Ok(());
        }

        election.status = ElectionStatus::Closed;
        storage::save_election(&env, election_index, &election);

        events::voting_closed(&env, election_index, election.votes_cast);
        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast `voter`'s single vote for a proposal.
    pub fn give_vote(
        env: Env,
        voter: Address,
        election_index: u32,
        proposal_index: u32,
    ) -> Result<(), ContractError> {
        voter.require_auth();

        let mut election = load_election(&env, election_index)?;
        if !election.is_open() {
            return Err(ContractError::VotingEnded);
        }

        let mut record = storage::get_voter(&env, election_index, &voter);
        if !record.has_right_to_vote {
            return Err(ContractError::NoRightToVote);
        }
        if record.has_voted {
            return Err(ContractError::AlreadyVoted);
        }

        let mut proposal = election
            .proposals
            .get(proposal_index)
            .ok_or(ContractError::ProposalOutOfRange)?;

        proposal.vote_count = safe_increment(proposal.vote_count)?;
        election.votes_cast = safe_increment(election.votes_cast)?;
        election.proposals.set(proposal_index, proposal);

        debug_assert_eq!(tally::total_votes(&election.proposals), election.votes_cast);

        record.has_voted = true;
        record.voted_proposal = Some(proposal_index);

        storage::save_voter(&env, election_index, &voter, &record);
        storage::save_election(&env, election_index, &election);

        events::vote_cast(&env, election_index, &voter, proposal_index);
        Ok(())
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    /// Index of the proposal with the most votes, lowest index on a tie.
    pub fn winning_proposal(env: Env, election_index: u32) -> Result<u32, ContractError> {
        let election = load_election(&env, election_index)?;
        tally::winning_proposal(&election.proposals).ok_or(ContractError::ProposalOutOfRange)
    }

    /// Name of the winning proposal.
    pub fn winner_name(env: Env, election_index: u32) -> Result<String, ContractError> {
        let election = load_election(&env, election_index)?;
        let winner = tally::winning_proposal(&election.proposals)
            .ok_or(ContractError::ProposalOutOfRange)?;
        election
            .proposals
            .get(winner)
            .map(|proposal| proposal.name)
            .ok_or(ContractError::ProposalOutOfRange)
    }

    /// Every election in creation order, with current tallies.
    ///
    /// Fails with `ElectionNotFound` rather than returning a snapshot with a
    /// hole if an indexed entry is missing (e.g. its TTL lapsed).
    pub fn get_statistics_of_all_vote(env: Env) -> Result<Vec<ElectionSummary>, ContractError> {
        let count = storage::get_election_count(&env);
        let mut summaries = Vec::new(&env);
        for index in 0..count {
            let election = load_election(&env, index)?;
            summaries.push_back(ElectionSummary::from_election(index, &election));
        }
        Ok(summaries)
    }

    pub fn get_election(env: Env, election_index: u32) -> Result<ElectionSummary, ContractError> {
        let election = load_election(&env, election_index)?;
        Ok(ElectionSummary::from_election(election_index, &election))
    }

    pub fn election_count(env: Env) -> u32 {
        storage::get_election_count(&env)
    }

    /// Voter record of `voter`, defaulted if it was never touched.
    pub fn get_voter(env: Env, election_index: u32, voter: Address) -> Result<Voter, ContractError> {
        load_election(&env, election_index)?;
        Ok(storage::get_voter(&env, election_index, &voter))
    }
}
