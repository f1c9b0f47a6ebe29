use soroban_sdk::{symbol_short, Address, Env};

use crate::types::WorkflowStatus;

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"), voter.clone()), voter.clone());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("prop_reg"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("voted"), voter.clone()), proposal_id);
}

/// Status codes are published as plain integers so indexers need no type
/// definitions to decode them.
pub fn workflow_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events().publish(
        (symbol_short!("wf_status"),),
        (previous.code(), new.code()),
    );
}
