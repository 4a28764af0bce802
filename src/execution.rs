multiversx_sc::imports!();

use crate::config::SelfGovernance;
use crate::errors::{ERR_MALFORMED_PAYLOAD, ERR_VALUE_TO_SELF};
use crate::types::{CallPayload, ProposalAction};

// ============================================================
// Action dispatch. Actions run in order inside the executing
// transaction: if one fails, the transaction reverts and none
// of the earlier actions keep their effect.
// ============================================================

#[multiversx_sc::module]
pub trait ExecutionModule: crate::config::ConfigModule + crate::events::EventsModule {
    fn perform_actions(&self, actions: &ManagedVec<Self::Api, ProposalAction<Self::Api>>) {
        let own_address = self.blockchain().get_sc_address();

        for action in actions.iter() {
            let call = self.decode_call_payload(&action.payload);

            if action.target == own_address {
                // Governance surface: no re-entrant self call, the mutators
                // take the capability directly.
                require!(action.value == 0u64, ERR_VALUE_TO_SELF);
                let grant = SelfGovernance::grant();
                self.dispatch_governance_call(&grant, &call);
            } else {
                self.call_target(&action.target, &action.value, call);
            }
        }
    }

    fn decode_call_payload(&self, payload: &ManagedBuffer) -> CallPayload<Self::Api> {
        if payload.is_empty() {
            return CallPayload {
                endpoint: ManagedBuffer::new(),
                arguments: ManagedVec::new(),
            };
        }

        match CallPayload::top_decode(payload.clone()) {
            Ok(call) => call,
            Err(_) => sc_panic!(ERR_MALFORMED_PAYLOAD),
        }
    }

    fn call_target(&self, target: &ManagedAddress, value: &BigUint, call: CallPayload<Self::Api>) {
        if call.endpoint.is_empty() {
            self.tx().to(target).egld(value).transfer();
            return;
        }

        self.tx()
            .to(target)
            .egld(value)
            .raw_call(call.endpoint)
            .arguments_raw(call.arguments.into())
            .sync_call();
    }
}
