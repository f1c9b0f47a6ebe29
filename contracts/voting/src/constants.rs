//! Storage lifetime policy and fixed values.

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger a day is 17,280 ledgers.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance entries (admin, status, counters) are bumped to one week.
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal entries are bumped to thirty days.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ── Proposals ────────────────────────────────────────────────────────────────

/// Description of the placeholder proposal stored at index 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Index of the placeholder proposal.
pub const GENESIS_PROPOSAL_ID: u32 = 0;
