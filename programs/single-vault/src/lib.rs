use anchor_lang::prelude::*;

pub mod accounting;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("Gf1CaQV9njL8z7CWWcrn7pKRxnpJnEHoTA3f4YK75JtA");

#[program]
pub mod single_vault {
    use super::*;

    /// Initialize a new vault for the given asset; the signer becomes owner
    pub fn initialize(ctx: Context<Initialize>, vault_id: u64) -> Result<()> {
        instructions::initialize::handler(ctx, vault_id)
    }

    /// Deposit assets and mint shares to the receiver
    /// Mints shares (floor rounding - favors vault)
    pub fn deposit(ctx: Context<Deposit>, assets: u64) -> Result<()> {
        instructions::deposit::handler(ctx, assets)
    }

    /// Mint exact shares to the receiver by depositing required assets
    /// Pays assets (ceiling rounding - favors vault)
    pub fn mint(ctx: Context<MintShares>, shares: u64) -> Result<()> {
        instructions::mint::handler(ctx, shares)
    }

    /// Withdraw exact assets to the receiver by burning the owner's shares
    /// Burns shares (ceiling rounding - favors vault)
    pub fn withdraw(ctx: Context<Withdraw>, assets: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, assets)
    }

    /// Redeem the owner's shares for assets sent to the receiver
    /// Receives assets (floor rounding - favors vault)
    pub fn redeem(ctx: Context<Redeem>, shares: u64) -> Result<()> {
        instructions::redeem::handler(ctx, shares)
    }

    /// Pause deposit, mint, withdraw and redeem (owner only)
    pub fn set_pause(ctx: Context<Admin>) -> Result<()> {
        instructions::admin::set_pause(ctx)
    }

    /// Unpause vault operations (owner only)
    pub fn set_unpause(ctx: Context<Admin>) -> Result<()> {
        instructions::admin::set_unpause(ctx)
    }

    /// Transfer vault ownership (owner only)
    pub fn transfer_ownership(ctx: Context<Admin>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership(ctx, new_owner)
    }

    // ============ View Functions (CPI composable) ============

    /// Preview shares for deposit (floor rounding)
    pub fn preview_deposit(ctx: Context<VaultView>, assets: u64) -> Result<()> {
        instructions::view::preview_deposit(ctx, assets)
    }

    /// Preview assets required for mint (ceiling rounding)
    pub fn preview_mint(ctx: Context<VaultView>, shares: u64) -> Result<()> {
        instructions::view::preview_mint(ctx, shares)
    }

    /// Preview shares to burn for withdraw (ceiling rounding)
    pub fn preview_withdraw(ctx: Context<VaultView>, assets: u64) -> Result<()> {
        instructions::view::preview_withdraw(ctx, assets)
    }

    /// Preview assets for redeem (floor rounding)
    pub fn preview_redeem(ctx: Context<VaultView>, shares: u64) -> Result<()> {
        instructions::view::preview_redeem(ctx, shares)
    }

    /// Convert assets to shares (floor rounding)
    pub fn convert_to_shares(ctx: Context<VaultView>, assets: u64) -> Result<()> {
        instructions::view::convert_to_shares_view(ctx, assets)
    }

    /// Convert shares to assets (floor rounding)
    pub fn convert_to_assets(ctx: Context<VaultView>, shares: u64) -> Result<()> {
        instructions::view::convert_to_assets_view(ctx, shares)
    }

    /// Get total assets in vault
    pub fn total_assets(ctx: Context<VaultView>) -> Result<()> {
        instructions::view::get_total_assets(ctx)
    }

    /// Whether the vault is paused
    pub fn is_paused(ctx: Context<VaultView>) -> Result<()> {
        instructions::view::is_paused(ctx)
    }

    /// Max assets depositable for receiver (u64::MAX, or 0 if paused or zero key)
    pub fn max_deposit(ctx: Context<VaultView>, receiver: Pubkey) -> Result<()> {
        instructions::view::max_deposit(ctx, receiver)
    }

    /// Max shares mintable for receiver (u64::MAX, or 0 if paused or zero key)
    pub fn max_mint(ctx: Context<VaultView>, receiver: Pubkey) -> Result<()> {
        instructions::view::max_mint(ctx, receiver)
    }

    /// Max assets owner can withdraw (u64::MAX, or 0 if paused or zero key)
    pub fn max_withdraw(ctx: Context<VaultView>, owner: Pubkey) -> Result<()> {
        instructions::view::max_withdraw(ctx, owner)
    }

    /// Max shares owner can redeem (u64::MAX, or 0 if paused or zero key)
    pub fn max_redeem(ctx: Context<VaultView>, owner: Pubkey) -> Result<()> {
        instructions::view::max_redeem(ctx, owner)
    }
}
