//! Error codes returned by the voting contract.
//!
//! Codes are grouped by range:
//! - 1-9: access and registry errors
//! - 10-19: phase errors, one per phase an operation expected

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Access / Registry Errors (1-9) =====
    /// Caller is not the administrator
    Unauthorized = 1,

    /// Caller is not a registered voter
    NotAVoter = 2,

    /// Voter is already registered
    AlreadyRegistered = 3,

    /// Proposal description is empty
    EmptyProposal = 4,

    /// Voter has already cast a vote
    AlreadyVoted = 5,

    /// Proposal id is outside the registered range
    ProposalNotFound = 6,

    // ===== Phase Errors (10-19) =====
    /// Voters can only be added while registering voters
    VotersRegistrationNotOpen = 10,

    /// Proposals can only be added while proposals registration is open
    ProposalsNotAllowed = 11,

    /// Proposals registration can only start from voters registration
    ProposalsRegistrationCannotStart = 12,

    /// Proposals registration has not started
    ProposalsRegistrationNotStarted = 13,

    /// Proposals registration has not ended
    ProposalsRegistrationNotEnded = 14,

    /// Voting session has not started (or is already over)
    VotingSessionNotStarted = 15,

    /// Voting session has not ended
    VotingSessionNotEnded = 16,
}

impl VotingError {
    /// True when the workflow was in the wrong phase for the call.
    pub fn is_phase_error(&self) -> bool {
        (*self as u32) >= 10 && (*self as u32) < 20
    }
}

#[cfg(test)]
mod tests {
    use super::VotingError;

    #[test]
    fn phase_errors_are_grouped() {
        assert!(VotingError::VotersRegistrationNotOpen.is_phase_error());
        assert!(VotingError::VotingSessionNotEnded.is_phase_error());
        assert!(!VotingError::Unauthorized.is_phase_error());
        assert!(!VotingError::ProposalNotFound.is_phase_error());
    }
}
