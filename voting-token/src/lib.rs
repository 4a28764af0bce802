#![no_std]

multiversx_sc::imports!();

pub mod voting_token_proxy;

// ============================================================
// Fixed-supply fungible token whose balances are voting weight.
// The whole supply is minted to the deployer at init.
// ============================================================

#[multiversx_sc::contract]
pub trait VotingToken {
    #[init]
    fn init(&self, initial_supply: BigUint) {
        let owner = self.blockchain().get_caller();
        self.balance(&owner).set(&initial_supply);
        self.total_supply().set(&initial_supply);

        self.transfer_event(&ManagedAddress::zero(), &owner, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);
        self.approval_event(&caller, &spender, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let allowance = self.allowance(&from, &caller).get();
        require!(allowance >= amount, "insufficient allowance");

        self.allowance(&from, &caller).set(&(&allowance - &amount));
        self.move_balance(&from, &to, &amount);
    }

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balance(from).get();
        require!(&from_balance >= amount, "insufficient balance");

        self.balance(from).set(&(&from_balance - amount));
        self.balance(to).update(|balance| *balance += amount);

        self.transfer_event(from, to, amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Current weight: the live balance, no checkpoints.
    #[view(getCurrentVotes)]
    fn get_current_votes(&self, account: ManagedAddress) -> BigUint {
        self.balance(&account).get()
    }

    #[view(getAllowance)]
    fn get_allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowance(&owner, &spender).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTotalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
