use soroban_sdk::{Address, Env};

use shared::constants::LEDGERS_PER_YEAR;

use crate::types::{DataKey, Election, Voter};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// Election results must stay readable long after voting ends.
const ELECTION_TTL_LEDGERS: u32 = LEDGERS_PER_YEAR;
const VOTER_TTL_LEDGERS: u32 = LEDGERS_PER_YEAR;
const ADMIN_TTL_LEDGERS: u32 = LEDGERS_PER_YEAR;

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Admin, ADMIN_TTL_LEDGERS, ADMIN_TTL_LEDGERS);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

// ── Election Count ───────────────────────────────────────────────────────────

pub fn get_election_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ElectionCount)
        .unwrap_or(0u32)
}

pub fn set_election_count(env: &Env, count: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::ElectionCount, &count);
    env.storage().persistent().extend_ttl(
        &DataKey::ElectionCount,
        ELECTION_TTL_LEDGERS,
        ELECTION_TTL_LEDGERS,
    );
}

// ── Elections ────────────────────────────────────────────────────────────────

pub fn save_election(env: &Env, index: u32, election: &Election) {
    let key = DataKey::Election(index);
    env.storage().persistent().set(&key, election);
    env.storage()
        .persistent()
        .extend_ttl(&key, ELECTION_TTL_LEDGERS, ELECTION_TTL_LEDGERS);
}

pub fn get_election(env: &Env, index: u32) -> Option<Election> {
    env.storage().persistent().get(&DataKey::Election(index))
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn save_voter(env: &Env, election_index: u32, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(election_index, address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, VOTER_TTL_LEDGERS, VOTER_TTL_LEDGERS);
}

/// Missing entries read as a voter with no right and no vote.
pub fn get_voter(env: &Env, election_index: u32, address: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(election_index, address.clone()))
        .unwrap_or_default()
}
