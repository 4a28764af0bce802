multiversx_sc::imports!();

use crate::voting_token_proxy;

const PERCENTAGE_DENOMINATOR: u64 = 100;

// ============================================================
// Voting-weight oracle: current weights and total supply,
// read from the voting token at call time. No snapshots.
// The views are reached with a plain sync call; the callee
// does not write storage.
// ============================================================

#[multiversx_sc::module]
pub trait OracleModule: crate::config::ConfigModule + crate::events::EventsModule {
    fn voting_weight(&self, account: &ManagedAddress) -> BigUint {
        let voting_token = self.governance_config().get().voting_token;
        self.tx()
            .to(&voting_token)
            .typed(voting_token_proxy::VotingTokenProxy)
            .get_current_votes(account.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn total_voting_weight(&self) -> BigUint {
        let voting_token = self.governance_config().get().voting_token;
        self.tx()
            .to(&voting_token)
            .typed(voting_token_proxy::VotingTokenProxy)
            .get_total_supply()
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Participation (for + against) a proposal created now would need.
    #[view(getQuorum)]
    fn quorum_threshold(&self) -> BigUint {
        let quorum_percentage = self.governance_config().get().quorum_percentage;
        self.quorum_threshold_for(quorum_percentage)
    }

    fn quorum_threshold_for(&self, quorum_percentage: u64) -> BigUint {
        let total_weight = self.total_voting_weight();
        (&total_weight * quorum_percentage) / PERCENTAGE_DENOMINATOR
    }
}
