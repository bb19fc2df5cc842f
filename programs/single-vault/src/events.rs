use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub asset_mint: Pubkey,
    pub shares_mint: Pubkey,
    pub vault_id: u64,
}

#[event]
pub struct Deposit {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub receiver: Pubkey,
    pub assets: u64,
    pub shares: u64,
}

impl Deposit {
    pub fn new(vault: Pubkey, caller: Pubkey, receiver: Pubkey, assets: u64, shares: u64) -> Self {
        Self {
            vault,
            caller,
            receiver,
            assets,
            shares,
        }
    }
}

#[event]
pub struct Withdraw {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub receiver: Pubkey,
    pub owner: Pubkey,
    pub assets: u64,
    pub shares: u64,
}

impl Withdraw {
    pub fn new(
        vault: Pubkey,
        caller: Pubkey,
        receiver: Pubkey,
        owner: Pubkey,
        assets: u64,
        shares: u64,
    ) -> Self {
        Self {
            vault,
            caller,
            receiver,
            owner,
            assets,
            shares,
        }
    }
}

#[event]
pub struct Paused {
    pub vault: Pubkey,
    pub account: Pubkey,
}

#[event]
pub struct Unpaused {
    pub vault: Pubkey,
    pub account: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub vault: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
