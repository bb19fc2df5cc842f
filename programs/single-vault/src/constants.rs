pub const VAULT_SEED: &[u8] = b"vault";
pub const SHARES_MINT_SEED: &[u8] = b"shares";

/// Returned by the max queries when nothing limits the operation.
pub const UNBOUNDED: u64 = u64::MAX;
