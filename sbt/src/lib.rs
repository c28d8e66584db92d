#![no_std]

multiversx_sc::imports!();

pub mod sbt_proxy;
pub mod types;

use types::Soul;

// ============================================================
// Contract
// ============================================================

/// Soulbound token registry. Souls are minted, updated and burned by the
/// owner only; there is no transfer endpoint.
#[multiversx_sc::contract]
pub trait Sbt {
    #[init]
    fn init(&self, name: ManagedBuffer, ticker: ManagedBuffer) {
        self.token_name().set(&name);
        self.ticker().set(&ticker);
        self.total_souls().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS — issuer only
    // ========================================================

    #[only_owner]
    #[endpoint(mint)]
    fn mint_soul(&self, soul_address: ManagedAddress, soul: Soul<Self::Api>) {
        require!(self.souls(&soul_address).is_empty(), "Soul already exists");

        self.souls(&soul_address).set(&soul);
        self.total_souls().update(|total| *total += 1);

        self.mint_event(&soul_address);
    }

    #[only_owner]
    #[endpoint(update)]
    fn update_soul(&self, soul_address: ManagedAddress, soul: Soul<Self::Api>) {
        require!(!self.souls(&soul_address).is_empty(), "Soul does not exist");

        self.souls(&soul_address).set(&soul);
        self.update_event(&soul_address);
    }

    #[only_owner]
    #[endpoint(burn)]
    fn burn_soul(&self, soul_address: ManagedAddress) {
        require!(!self.souls(&soul_address).is_empty(), "Soul does not exist");

        self.souls(&soul_address).clear();
        self.total_souls().update(|total| *total -= 1);

        self.burn_event(&soul_address);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasSoul)]
    fn has_soul(&self, soul_address: ManagedAddress) -> bool {
        !self.souls(&soul_address).is_empty()
    }

    #[view(getSoul)]
    fn get_soul(&self, soul_address: ManagedAddress) -> Soul<Self::Api> {
        require!(!self.souls(&soul_address).is_empty(), "Soul does not exist");
        self.souls(&soul_address).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(&self, #[indexed] soul_address: &ManagedAddress);

    #[event("update")]
    fn update_event(&self, #[indexed] soul_address: &ManagedAddress);

    #[event("burn")]
    fn burn_event(&self, #[indexed] soul_address: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getName)]
    #[storage_mapper("name")]
    fn token_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getTicker)]
    #[storage_mapper("ticker")]
    fn ticker(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getTotalSouls)]
    #[storage_mapper("totalSouls")]
    fn total_souls(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("souls")]
    fn souls(&self, soul_address: &ManagedAddress) -> SingleValueMapper<Soul<Self::Api>>;
}
