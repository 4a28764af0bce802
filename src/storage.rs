multiversx_sc::imports!();

use crate::types::Proposal;

/// Proposal store: the counter, the proposals and their ballots.
///
/// Ids run from 1 to `proposalCount`; nothing is ever removed, so the counter
/// alone answers whether an id exists.
#[multiversx_sc::module]
pub trait StorageModule {
    fn proposal_exists(&self, proposal_id: u64) -> bool {
        proposal_id >= 1 && proposal_id <= self.proposal_count().get()
    }

    /// Reserves the next id. The caller must store the proposal under it.
    fn next_proposal_id(&self) -> u64 {
        let proposal_id = self.proposal_count().get() + 1;
        self.proposal_count().set(proposal_id);
        proposal_id
    }

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[view(hasVoted)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
