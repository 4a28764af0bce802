// ============================================================
// Error messages, grouped by the kind of failure they signal.
// Every one aborts the transaction and rolls back its writes.
// ============================================================

// ── Unauthorized ──

pub const ERR_NO_VOTING_POWER: &str = "Proposer must have some voting power";
pub const ERR_NOT_SELF: &str = "Caller is not the governor";

// ── NotFound ──

pub const ERR_INVALID_PROPOSAL: &str = "Invalid proposal id";

// ── Conflict ──

pub const ERR_ALREADY_VOTED: &str = "Voter already voted";

// ── InvalidState ──

pub const ERR_NOT_ACTIVE: &str = "Proposal is not active";
pub const ERR_NOT_QUEUED: &str = "Only queued proposals can be executed";

// ── InvalidArgument ──

pub const ERR_LENGTH_MISMATCH: &str = "Targets, values and payloads must have the same length";
pub const ERR_NO_ACTIONS: &str = "Proposal must contain at least one action";
pub const ERR_ZERO_VOTING_PERIOD: &str = "Voting period must be positive";
pub const ERR_INVALID_QUORUM: &str = "Quorum percentage must be between 1 and 100";
pub const ERR_INVALID_VOTING_TOKEN: &str = "Voting token must be a smart contract";

// ── ExecutionFailed ──

pub const ERR_MALFORMED_PAYLOAD: &str = "Execution failed: malformed call payload";
pub const ERR_UNKNOWN_GOVERNANCE_ENDPOINT: &str = "Execution failed: unknown governance endpoint";
pub const ERR_VALUE_TO_SELF: &str = "Execution failed: governance calls cannot carry value";
