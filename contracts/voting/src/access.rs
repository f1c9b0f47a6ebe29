//! Caller checks for the election.
//!
//! Two roles exist: the administrator recorded at construction, and
//! registered voters. Both checks first require the caller's signature, so
//! an address can only act for itself.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Require that `caller` signed the invocation and is the administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let admin = storage::get_admin(env).ok_or(VotingError::Unauthorized)?;
    if *caller != admin {
        return Err(VotingError::Unauthorized);
    }

    Ok(())
}

/// Require that `caller` signed the invocation and is a registered voter.
/// Returns the caller's record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();

    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        return Err(VotingError::NotAVoter);
    }

    Ok(voter)
}
