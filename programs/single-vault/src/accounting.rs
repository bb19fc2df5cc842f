//! Validation and quoting for every vault entry point.
//!
//! A [`VaultSnapshot`] is built fresh at the top of each instruction from the
//! live asset balance, the live share supply and the stored pause flag. The
//! instruction handlers ask it for the amount to move and only then touch the
//! token programs, so every check below runs before any balance changes.
//!
//! Check order is part of the interface: when several conditions fail at once
//! the first one listed for the operation is the error reported.

use anchor_lang::prelude::*;

use crate::{
    constants::UNBOUNDED,
    error::VaultError,
    math::{convert_to_assets, convert_to_shares, Rounding},
};

/// Vault accounting state as observed at the start of one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultSnapshot {
    /// Balance of the vault's asset token account
    pub total_assets: u64,
    /// Supply of the shares mint
    pub total_supply: u64,
    pub paused: bool,
}

impl VaultSnapshot {
    /// Shares for assets at the current rate (floor rounding)
    pub fn convert_to_shares(&self, assets: u64) -> Result<u64> {
        convert_to_shares(assets, self.total_assets, self.total_supply, Rounding::Floor)
    }

    /// Assets for shares at the current rate (floor rounding)
    pub fn convert_to_assets(&self, shares: u64) -> Result<u64> {
        convert_to_assets(shares, self.total_assets, self.total_supply, Rounding::Floor)
    }

    // ============ Previews (no validation, callable while paused) ============

    /// Shares minted for depositing `assets` (floor - user receives less)
    pub fn preview_deposit(&self, assets: u64) -> Result<u64> {
        convert_to_shares(assets, self.total_assets, self.total_supply, Rounding::Floor)
    }

    /// Assets pulled for minting exactly `shares` (ceiling - user pays more)
    pub fn preview_mint(&self, shares: u64) -> Result<u64> {
        convert_to_assets(shares, self.total_assets, self.total_supply, Rounding::Ceiling)
    }

    /// Shares burned for withdrawing exactly `assets` (ceiling - user burns more)
    pub fn preview_withdraw(&self, assets: u64) -> Result<u64> {
        convert_to_shares(assets, self.total_assets, self.total_supply, Rounding::Ceiling)
    }

    /// Assets paid out for redeeming `shares` (floor - user receives less)
    pub fn preview_redeem(&self, shares: u64) -> Result<u64> {
        convert_to_assets(shares, self.total_assets, self.total_supply, Rounding::Floor)
    }

    // ============ Max queries ============
    //
    // Withdraw and redeem capacity is deliberately not capped by the owner's
    // share balance; that check happens inside `withdraw` and the token burn.

    pub fn max_deposit(&self, receiver: &Pubkey) -> u64 {
        self.capacity_for(receiver)
    }

    pub fn max_mint(&self, receiver: &Pubkey) -> u64 {
        self.capacity_for(receiver)
    }

    pub fn max_withdraw(&self, owner: &Pubkey) -> u64 {
        self.capacity_for(owner)
    }

    pub fn max_redeem(&self, owner: &Pubkey) -> u64 {
        self.capacity_for(owner)
    }

    fn capacity_for(&self, account: &Pubkey) -> u64 {
        if *account == Pubkey::default() || self.paused {
            0
        } else {
            UNBOUNDED
        }
    }

    // ============ Execution quotes ============

    /// Order: zero amount, zero receiver, paused. Returns shares to mint.
    pub fn deposit(&self, assets: u64, receiver: &Pubkey) -> Result<u64> {
        require!(assets > 0, VaultError::ZeroAmount);
        require_keys_neq!(*receiver, Pubkey::default(), VaultError::ZeroAddress);
        self.require_active()?;

        self.preview_deposit(assets)
    }

    /// Order: zero amount, zero receiver, paused. Returns assets to pull.
    pub fn mint(&self, shares: u64, receiver: &Pubkey) -> Result<u64> {
        require!(shares > 0, VaultError::ZeroAmount);
        require_keys_neq!(*receiver, Pubkey::default(), VaultError::ZeroAddress);
        self.require_active()?;

        self.preview_mint(shares)
    }

    /// Order: paused, owner balance. Returns shares to burn.
    ///
    /// Withdraw has no zero-amount or zero-receiver check, so it takes no receiver.
    /// A share count beyond u64 is more than any balance and reports as such.
    pub fn withdraw(&self, assets: u64, owner_shares: u64) -> Result<u64> {
        self.require_active()?;

        let shares = match self.preview_withdraw(assets) {
            Err(err) if err == anchor_lang::error::Error::from(VaultError::MathOverflow) => {
                return err!(VaultError::InsufficientShares)
            }
            quote => quote?,
        };
        require!(shares <= owner_shares, VaultError::InsufficientShares);

        Ok(shares)
    }

    /// Order: zero amount, zero receiver, paused. Returns assets to pay out.
    pub fn redeem(&self, shares: u64, receiver: &Pubkey) -> Result<u64> {
        require!(shares > 0, VaultError::ZeroAmount);
        require_keys_neq!(*receiver, Pubkey::default(), VaultError::ZeroAddress);
        self.require_active()?;

        self.preview_redeem(shares)
    }

    fn require_active(&self) -> Result<()> {
        require!(!self.paused, VaultError::VaultPaused);
        Ok(())
    }
}
