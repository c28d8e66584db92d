multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Soul — the non-transferable credential attached to an address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Soul<M: ManagedTypeApi> {
    pub identity: ManagedBuffer<M>,
    pub url: ManagedBuffer<M>,
    pub score: u64,
    /// Issuance time, supplied by the issuer.
    pub timestamp: u64,
}
