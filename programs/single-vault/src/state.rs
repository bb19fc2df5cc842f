use anchor_lang::prelude::*;

use crate::{accounting::VaultSnapshot, error::VaultError};

#[account]
pub struct Vault {
    /// Vault admin who can pause/unpause and transfer ownership
    pub owner: Pubkey,
    /// Underlying asset mint
    pub asset_mint: Pubkey,
    /// Shares mint (Token-2022, vault PDA is mint authority)
    pub shares_mint: Pubkey,
    /// Token account holding assets; its balance is the vault's total assets
    pub asset_vault: Pubkey,
    /// PDA bump seed
    pub bump: u8,
    /// Emergency pause flag
    pub paused: bool,
    /// Unique vault identifier (allows multiple vaults per asset)
    pub vault_id: u64,
    /// Reserved for future upgrades
    pub _reserved: [u8; 64],
}

impl Vault {
    pub const LEN: usize = 8 +  // discriminator
        32 +  // owner
        32 +  // asset_mint
        32 +  // shares_mint
        32 +  // asset_vault
        1 +   // bump
        1 +   // paused
        8 +   // vault_id
        64; // _reserved

    /// Pair the stored pause flag with balances read from the ledgers in this instruction.
    pub fn snapshot(&self, total_assets: u64, total_supply: u64) -> VaultSnapshot {
        VaultSnapshot {
            total_assets,
            total_supply,
            paused: self.paused,
        }
    }

    /// Owner gate. The rejected caller travels with the error as its left pubkey.
    pub fn check_owner(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.owner {
            msg!("Unauthorized account: {}", caller);
            return Err(error!(VaultError::Unauthorized).with_pubkeys((*caller, self.owner)));
        }
        Ok(())
    }

    /// Owner-only pause transition. Setting the flag to its current value is allowed.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<()> {
        self.check_owner(caller)?;
        self.paused = paused;
        Ok(())
    }

    /// Owner-only handover. Returns the previous owner.
    pub fn transfer_owner(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.check_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), VaultError::InvalidOwner);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}
