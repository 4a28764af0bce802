multiversx_sc::imports!();

use crate::types::ProposalAction;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] start_block: u64,
        #[indexed] end_block: u64,
        #[indexed] description: &ManagedBuffer,
        actions: &ManagedVec<Self::Api, ProposalAction<Self::Api>>,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("votingPeriodUpdated")]
    fn voting_period_updated_event(&self, #[indexed] previous: u64, #[indexed] current: u64);

    #[event("quorumPercentageUpdated")]
    fn quorum_percentage_updated_event(&self, #[indexed] previous: u64, #[indexed] current: u64);

    #[event("treasuryFunded")]
    fn treasury_funded_event(&self, #[indexed] donor: &ManagedAddress, amount: &BigUint);
}
