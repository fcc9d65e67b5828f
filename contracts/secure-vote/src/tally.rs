//! Tally computation over a proposal list.

use soroban_sdk::Vec;

use crate::types::Proposal;

/// Index of the first proposal holding the highest vote count.
///
/// Ties go to the lowest index, so an election nobody voted in is won by
/// proposal 0. Returns `None` only for an empty list.
pub fn winning_proposal(proposals: &Vec<Proposal>) -> Option<u32> {
    let mut winner: Option<(u32, u32)> = None;
    for (index, proposal) in proposals.iter().enumerate() {
        match winner {
            Some((_, best)) if proposal.vote_count <= best => {}
            _ => winner = Some((index as u32, proposal.vote_count)),
        }
    }
    winner.map(|(index, _)| index)
}

/// Sum of all vote counts.
pub fn total_votes(proposals: &Vec<Proposal>) -> u32 {
    proposals.iter().map(|p| p.vote_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{Env, String};

    fn proposals(env: &Env, counts: &[u32]) -> Vec<Proposal> {
        let mut list = Vec::new(env);
        for count in counts {
            list.push_back(Proposal {
                name: String::from_str(env, "p"),
                vote_count: *count,
            });
        }
        list
    }

    #[test]
    fn test_highest_count_wins() {
        let env = Env::default();
        assert_eq!(winning_proposal(&proposals(&env, &[1, 4, 2])), Some(1));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let env = Env::default();
        assert_eq!(winning_proposal(&proposals(&env, &[0, 3, 3, 1])), Some(1));
        assert_eq!(winning_proposal(&proposals(&env, &[0, 0])), Some(0));
    }

    #[test]
    fn test_winner_is_stable_across_calls() {
        let env = Env::default();
        let list = proposals(&env, &[2, 5, 5]);
        assert_eq!(winning_proposal(&list), winning_proposal(&list));
    }

    #[test]
    fn test_empty_list_has_no_winner() {
        let env = Env::default();
        assert_eq!(winning_proposal(&proposals(&env, &[])), None);
    }

    #[test]
    fn test_total_votes() {
        let env = Env::default();
        assert_eq!(total_votes(&proposals(&env, &[1, 4, 2])), 7);
        assert_eq!(total_votes(&proposals(&env, &[])), 0);
    }
}
