//! # Voting Contract
//!
//! A single-administrator election. The administrator registers voters and
//! walks the election through six phases:
//!
//! 1. `RegisteringVoters`: the administrator adds voters
//! 2. `ProposalsRegistrationStarted`: voters submit proposals
//! 3. `ProposalsRegistrationEnded`
//! 4. `VotingSessionStarted`: each voter casts one vote
//! 5. `VotingSessionEnded`
//! 6. `VotesTallied`: the winning proposal is fixed
//!
//! Index 0 of the proposal list always holds a `GENESIS` placeholder, so
//! submitted proposals are numbered from 1.

#![no_std]

mod access;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod workflow;

pub use constants::{GENESIS_DESCRIPTION, GENESIS_PROPOSAL_ID};
pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};
