multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — resolved on every read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Id 0, or an id above the proposal counter.
    Undefined,
    /// Voting window still open.
    Active,
    /// Window closed without quorum, or for <= against. Terminal.
    Defeated,
    /// Window closed with quorum and majority. Waits for `execute`.
    Queued,
    /// Actions ran successfully. Terminal.
    Executed,
}

// ============================================================
// Proposal Action — one (target, value, payload) triple
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct ProposalAction<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    /// EGLD sent along with the call, drawn from the governor's balance.
    pub value: BigUint<M>,
    /// Opaque until execution, then decoded as a `CallPayload`.
    pub payload: ManagedBuffer<M>,
}

/// Decoded form of an action payload.
///
/// An empty payload, or an empty `endpoint`, means a plain EGLD transfer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct CallPayload<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal — the permanent governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub actions: ManagedVec<M, ProposalAction<M>>,
    pub description: ManagedBuffer<M>,
    /// Block nonce at creation
    pub start_block: u64,
    /// start_block + the voting period in effect at creation
    pub end_block: u64,
    /// Quorum percentage in effect at creation
    pub quorum_percentage: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn participation(&self) -> BigUint<M> {
        &self.for_votes + &self.against_votes
    }
}

// ============================================================
// Governance Config — every parameter the governor owns
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GovernanceConfig<M: ManagedTypeApi> {
    /// Contract answering `getCurrentVotes` / `getTotalSupply`
    pub voting_token: ManagedAddress<M>,
    /// Length of the voting window in blocks
    pub voting_period: u64,
    /// Share of total supply (1..=100) that must take part in a vote
    pub quorum_percentage: u64,
}
