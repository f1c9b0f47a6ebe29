use soroban_sdk::{contracttype, Address, String};

/// Phases of the election, in the only order they may occur.
///
/// The discriminants are part of the contract interface: they are what
/// clients read back from `workflow_status` and from status change events.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The phase that follows this one, `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => Some(WorkflowStatus::ProposalsRegistrationEnded),
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

/// A voter record. Identities that were never registered read back as
/// `Voter::default()`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin,
    Status,
    ProposalCount,
    WinningProposalId,
    Voter(Address),
    Proposal(u32),
}

#[cfg(test)]
mod tests {
    use super::WorkflowStatus;

    #[test]
    fn status_advances_one_step_at_a_time() {
        let mut status = WorkflowStatus::RegisteringVoters;
        let mut seen = 1;
        while let Some(next) = status.next() {
            assert_eq!(next.code(), status.code() + 1);
            assert!(next > status);
            status = next;
            seen += 1;
        }
        assert_eq!(status, WorkflowStatus::VotesTallied);
        assert_eq!(seen, 6);
    }
}
