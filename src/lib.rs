#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod dao_governor_proxy;
pub mod errors;
pub mod events;
pub mod execution;
pub mod oracle;
pub mod storage;
pub mod types;
pub mod voting_token_proxy;

use errors::{
    ERR_ALREADY_VOTED, ERR_INVALID_PROPOSAL, ERR_INVALID_QUORUM, ERR_INVALID_VOTING_TOKEN,
    ERR_LENGTH_MISMATCH, ERR_NOT_ACTIVE, ERR_NOT_QUEUED, ERR_NO_ACTIONS, ERR_NO_VOTING_POWER,
    ERR_ZERO_VOTING_PERIOD,
};
use types::{GovernanceConfig, Proposal, ProposalAction, ProposalState};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DaoGovernor:
    config::ConfigModule
    + events::EventsModule
    + execution::ExecutionModule
    + oracle::OracleModule
    + storage::StorageModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, voting_token: ManagedAddress, voting_period: u64, quorum_percentage: u64) {
        require!(
            self.blockchain().is_smart_contract(&voting_token),
            ERR_INVALID_VOTING_TOKEN
        );
        require!(voting_period > 0, ERR_ZERO_VOTING_PERIOD);
        require!(
            quorum_percentage >= 1 && quorum_percentage <= 100,
            ERR_INVALID_QUORUM
        );

        self.governance_config().set(GovernanceConfig {
            voting_token,
            voting_period,
            quorum_percentage,
        });
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Any holder of voting weight can propose.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        payloads: ManagedVec<ManagedBuffer>,
        description: ManagedBuffer,
    ) -> u64 {
        let action_count = targets.len();
        require!(
            values.len() == action_count && payloads.len() == action_count,
            ERR_LENGTH_MISMATCH
        );
        require!(action_count > 0, ERR_NO_ACTIONS);

        let caller = self.blockchain().get_caller();
        require!(self.voting_weight(&caller) > 0u64, ERR_NO_VOTING_POWER);

        let mut actions = ManagedVec::new();
        for index in 0..action_count {
            actions.push(ProposalAction {
                target: targets.get(index).clone_value(),
                value: values.get(index).clone_value(),
                payload: payloads.get(index).clone_value(),
            });
        }

        // Parameters in effect now; later updates do not touch this proposal.
        let config = self.governance_config().get();
        let start_block = self.blockchain().get_block_nonce();
        let end_block = start_block + config.voting_period;

        let proposal_id = self.next_proposal_id();
        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            actions,
            description,
            start_block,
            end_block,
            quorum_percentage: config.quorum_percentage,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            executed: false,
        };
        self.proposals(proposal_id).set(&proposal);

        self.proposal_created_event(
            proposal_id,
            &caller,
            start_block,
            end_block,
            &proposal.description,
            &proposal.actions,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One ballot per account, weighted by current voting weight.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        require!(self.proposal_exists(proposal_id), ERR_INVALID_PROPOSAL);
        require!(
            self.get_proposal_state(proposal_id) == ProposalState::Active,
            ERR_NOT_ACTIVE
        );
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let weight = self.voting_weight(&caller);

        self.proposals(proposal_id).update(|proposal| {
            if support {
                proposal.for_votes += &weight;
            } else {
                proposal.against_votes += &weight;
            }
        });
        self.has_voted(proposal_id, &caller).set(true);

        self.vote_cast_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: execute
    // Anyone can trigger a queued proposal, exactly once.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        require!(
            self.get_proposal_state(proposal_id) == ProposalState::Queued,
            ERR_NOT_QUEUED
        );

        // Flag first: a target re-entering `execute` finds the proposal Executed.
        let mut proposal = self.proposals(proposal_id).get();
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.perform_actions(&proposal.actions);

        let caller = self.blockchain().get_caller();
        self.proposal_executed_event(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: fund
    // EGLD backing for actions that carry a value.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.treasury_funded_event(&caller, &amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Recomputed from storage and the current block on every call.
    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        if !self.proposal_exists(proposal_id) {
            return ProposalState::Undefined;
        }

        let proposal = self.proposals(proposal_id).get();
        if self.blockchain().get_block_nonce() < proposal.end_block {
            return ProposalState::Active;
        }
        if proposal.executed {
            return ProposalState::Executed;
        }

        let quorum = self.quorum_threshold_for(proposal.quorum_percentage);
        if proposal.participation() < quorum || proposal.for_votes <= proposal.against_votes {
            ProposalState::Defeated
        } else {
            ProposalState::Queued
        }
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(self.proposal_exists(proposal_id), ERR_INVALID_PROPOSAL);
        self.proposals(proposal_id).get()
    }
}
