multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_QUORUM, ERR_MALFORMED_PAYLOAD, ERR_NOT_SELF, ERR_UNKNOWN_GOVERNANCE_ENDPOINT,
    ERR_ZERO_VOTING_PERIOD,
};
use crate::types::{CallPayload, GovernanceConfig};

pub const UPDATE_VOTING_PERIOD_ENDPOINT: &str = "updateVotingPeriod";
pub const UPDATE_QUORUM_PERCENTAGE_ENDPOINT: &str = "updateQuorumPercentage";

/// Proof that the running code acts on behalf of the governor itself.
///
/// Only obtainable inside this crate: from the governor's own `execute`, or
/// from a caller check that found the contract calling itself. Every
/// configuration mutator demands one.
pub struct SelfGovernance {
    _private: (),
}

impl SelfGovernance {
    pub(crate) fn grant() -> Self {
        SelfGovernance { _private: () }
    }
}

// ============================================================
// Self-governance gate: configuration changes only through
// a passed proposal. There is no admin account.
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINTS — reachable from outside, always gated
    // ========================================================

    #[endpoint(updateVotingPeriod)]
    fn update_voting_period(&self, new_period: u64) {
        let grant = self.require_self_caller();
        self.apply_voting_period(&grant, new_period);
    }

    #[endpoint(updateQuorumPercentage)]
    fn update_quorum_percentage(&self, new_percentage: u64) {
        let grant = self.require_self_caller();
        self.apply_quorum_percentage(&grant, new_percentage);
    }

    fn require_self_caller(&self) -> SelfGovernance {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_sc_address(), ERR_NOT_SELF);
        SelfGovernance::grant()
    }

    // ========================================================
    // INTERNAL: dispatch of proposal actions aimed at the governor
    // ========================================================

    fn dispatch_governance_call(&self, grant: &SelfGovernance, call: &CallPayload<Self::Api>) {
        if call.endpoint == ManagedBuffer::from(UPDATE_VOTING_PERIOD_ENDPOINT) {
            let new_period = self.decode_single_u64(call);
            self.apply_voting_period(grant, new_period);
        } else if call.endpoint == ManagedBuffer::from(UPDATE_QUORUM_PERCENTAGE_ENDPOINT) {
            let new_percentage = self.decode_single_u64(call);
            self.apply_quorum_percentage(grant, new_percentage);
        } else {
            sc_panic!(ERR_UNKNOWN_GOVERNANCE_ENDPOINT);
        }
    }

    fn decode_single_u64(&self, call: &CallPayload<Self::Api>) -> u64 {
        require!(call.arguments.len() == 1, ERR_MALFORMED_PAYLOAD);
        let raw = call.arguments.get(0).clone_value();
        match u64::top_decode(raw) {
            Ok(value) => value,
            Err(_) => sc_panic!(ERR_MALFORMED_PAYLOAD),
        }
    }

    fn apply_voting_period(&self, _grant: &SelfGovernance, new_period: u64) {
        require!(new_period > 0, ERR_ZERO_VOTING_PERIOD);

        let mut config = self.governance_config().get();
        let previous = config.voting_period;
        config.voting_period = new_period;
        self.governance_config().set(&config);

        self.voting_period_updated_event(previous, new_period);
    }

    fn apply_quorum_percentage(&self, _grant: &SelfGovernance, new_percentage: u64) {
        require!(
            new_percentage >= 1 && new_percentage <= 100,
            ERR_INVALID_QUORUM
        );

        let mut config = self.governance_config().get();
        let previous = config.quorum_percentage;
        config.quorum_percentage = new_percentage;
        self.governance_config().set(&config);

        self.quorum_percentage_updated_event(previous, new_percentage);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getVotingPeriod)]
    fn get_voting_period(&self) -> u64 {
        self.governance_config().get().voting_period
    }

    #[view(getQuorumPercentage)]
    fn get_quorum_percentage(&self) -> u64 {
        self.governance_config().get().quorum_percentage
    }

    #[view(getVotingToken)]
    fn get_voting_token(&self) -> ManagedAddress {
        self.governance_config().get().voting_token
    }

    #[storage_mapper("governanceConfig")]
    fn governance_config(&self) -> SingleValueMapper<GovernanceConfig<Self::Api>>;
}
