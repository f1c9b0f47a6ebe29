//! Phase gating and the tally scan.

use soroban_sdk::{log, Env};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::WorkflowStatus;

/// Fail with `phase_error` unless the election is currently in `expected`.
pub fn ensure_status(
    env: &Env,
    expected: WorkflowStatus,
    phase_error: VotingError,
) -> Result<(), VotingError> {
    if storage::get_status(env) != expected {
        return Err(phase_error);
    }
    Ok(())
}

/// Move from `from` to `to` and announce the change. Callers must have
/// checked that the election is in `from`.
pub fn advance(env: &Env, from: WorkflowStatus, to: WorkflowStatus) {
    storage::set_status(env, to);
    storage::bump_instance(env);

    events::workflow_status_change(env, from, to);
    log!(env, "workflow status changed", from.code(), to.code());
}

/// Index of the entry with the highest count. A later entry only takes the
/// lead with a strictly greater count, so ties go to the lowest index.
/// Stops at the first entry that could not be read.
pub fn leading_proposal<I, E>(vote_counts: I) -> Result<u32, E>
where
    I: IntoIterator<Item = Result<u32, E>>,
{
    let mut best_id = 0u32;
    let mut best_count = 0u32;

    for (proposal_id, count) in (0u32..).zip(vote_counts) {
        let count = count?;
        if count > best_count {
            best_id = proposal_id;
            best_count = count;
        }
    }

    Ok(best_id)
}

/// Scan every stored proposal in index order and return the winner.
/// Fails if an entry below the proposal count is missing from storage.
pub fn tally(env: &Env) -> Result<u32, VotingError> {
    let count = storage::get_proposal_count(env);
    leading_proposal((0..count).map(|proposal_id| {
        storage::get_proposal(env, proposal_id)
            .map(|p| p.vote_count)
            .ok_or(VotingError::ProposalNotFound)
    }))
}

#[cfg(test)]
mod tests {
    use super::leading_proposal;

    fn leader<const N: usize>(counts: [u32; N]) -> u32 {
        leading_proposal(counts.map(Ok::<u32, ()>)).unwrap()
    }

    #[test]
    fn highest_count_wins() {
        assert_eq!(leader([0, 1, 4, 2]), 2);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        assert_eq!(leader([0, 3, 1, 3]), 1);
        assert_eq!(leader([0, 2, 2, 2]), 1);
    }

    #[test]
    fn no_votes_selects_genesis() {
        assert_eq!(leader([0, 0, 0]), 0);
        assert_eq!(leader([]), 0);
    }

    #[test]
    fn genesis_can_lead() {
        assert_eq!(leader([2, 1, 2]), 0);
    }

    #[test]
    fn unreadable_entry_stops_the_scan() {
        let counts = [Ok(0), Ok(5), Err("missing"), Ok(9)];
        assert_eq!(leading_proposal(counts), Err("missing"));
    }
}
