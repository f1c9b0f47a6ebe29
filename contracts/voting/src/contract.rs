use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    access,
    constants::GENESIS_DESCRIPTION,
    errors::VotingError,
    events, storage,
    types::{Proposal, Voter, WorkflowStatus},
    workflow,
};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Deploy a new election administered by `admin`.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::bump_instance(&env);
    }

    pub fn admin(env: Env) -> Option<Address> {
        storage::get_admin(&env)
    }

    // ── Voter Registry ───────────────────────────────────────────────────────

    /// Register `voter`. Administrator only, while registering voters.
    ///
    /// Emits `voter_reg`.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        workflow::ensure_status(
            &env,
            WorkflowStatus::RegisteringVoters,
            VotingError::VotersRegistrationNotOpen,
        )?;

        let mut record = storage::get_voter(&env, &voter);
        if record.is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        record.is_registered = true;
        storage::save_voter(&env, &voter, &record);
        storage::bump_instance(&env);

        events::voter_registered(&env, &voter);
        log!(&env, "voter registered", voter);

        Ok(())
    }

    /// Full record for `voter`; unregistered addresses get the zero record.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter)
    }

    // ── Proposal Registry ────────────────────────────────────────────────────

    /// Submit a proposal. Registered voters only, while proposals
    /// registration is open. Returns the new proposal's index.
    ///
    /// Emits `prop_reg`.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        if description.len() == 0 {
            return Err(VotingError::EmptyProposal);
        }

        access::require_voter(&env, &caller)?;
        workflow::ensure_status(
            &env,
            WorkflowStatus::ProposalsRegistrationStarted,
            VotingError::ProposalsNotAllowed,
        )?;

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        storage::bump_instance(&env);

        events::proposal_registered(&env, proposal_id);
        log!(&env, "proposal registered", caller, proposal_id);

        Ok(proposal_id)
    }

    pub fn get_one_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)
    }

    /// Number of stored proposals, counting the genesis entry at index 0.
    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single, irrevocable vote for `proposal_id`.
    ///
    /// Emits `voted`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = access::require_voter(&env, &caller)?;
        workflow::ensure_status(
            &env,
            WorkflowStatus::VotingSessionStarted,
            VotingError::VotingSessionNotStarted,
        )?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        proposal.vote_count += 1;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;

        storage::save_proposal(&env, proposal_id, &proposal);
        storage::save_voter(&env, &caller, &voter);
        storage::bump_instance(&env);

        events::voted(&env, &caller, proposal_id);
        log!(&env, "vote cast", caller, proposal_id);

        Ok(())
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    /// Open proposals registration. The genesis proposal is stored at
    /// index 0 first, so submitted proposals start at 1.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::RegisteringVoters;
        workflow::ensure_status(&env, from, VotingError::ProposalsRegistrationCannotStart)?;

        storage::push_proposal(
            &env,
            &Proposal {
                description: String::from_str(&env, GENESIS_DESCRIPTION),
                vote_count: 0,
            },
        );

        workflow::advance(&env, from, WorkflowStatus::ProposalsRegistrationStarted);
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::ProposalsRegistrationStarted;
        workflow::ensure_status(&env, from, VotingError::ProposalsRegistrationNotStarted)?;

        workflow::advance(&env, from, WorkflowStatus::ProposalsRegistrationEnded);
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::ProposalsRegistrationEnded;
        workflow::ensure_status(&env, from, VotingError::ProposalsRegistrationNotEnded)?;

        workflow::advance(&env, from, WorkflowStatus::VotingSessionStarted);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::VotingSessionStarted;
        workflow::ensure_status(&env, from, VotingError::VotingSessionNotStarted)?;

        workflow::advance(&env, from, WorkflowStatus::VotingSessionEnded);
        Ok(())
    }

    /// Count the votes and record the winner. Ties go to the proposal
    /// registered first.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        let from = WorkflowStatus::VotingSessionEnded;
        workflow::ensure_status(&env, from, VotingError::VotingSessionNotEnded)?;

        let winner = workflow::tally(&env)?;
        storage::set_winning_proposal_id(&env, winner);
        log!(&env, "votes tallied", winner);

        workflow::advance(&env, from, WorkflowStatus::VotesTallied);
        Ok(())
    }

    /// The winning proposal's index.
    ///
    /// Reads 0 until `tally_votes` has run, which is also the genesis index.
    /// Check `workflow_status` for `VotesTallied` before trusting the value.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winning_proposal_id(&env)
    }

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }
}
