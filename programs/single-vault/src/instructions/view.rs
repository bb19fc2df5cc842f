use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::set_return_data;
use anchor_spl::token_interface::{Mint, TokenAccount};

use crate::{accounting::VaultSnapshot, state::Vault};

#[derive(Accounts)]
pub struct VaultView<'info> {
    pub vault: Account<'info, Vault>,

    #[account(constraint = shares_mint.key() == vault.shares_mint)]
    pub shares_mint: InterfaceAccount<'info, Mint>,

    #[account(constraint = asset_vault.key() == vault.asset_vault)]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,
}

impl<'info> VaultView<'info> {
    fn snapshot(&self) -> VaultSnapshot {
        self.vault.snapshot(self.asset_vault.amount, self.shares_mint.supply)
    }
}

/// Preview how many shares would be minted for given assets (floor rounding)
pub fn preview_deposit(ctx: Context<VaultView>, assets: u64) -> Result<()> {
    let shares = ctx.accounts.snapshot().preview_deposit(assets)?;
    set_return_data(&shares.to_le_bytes());
    Ok(())
}

/// Preview how many assets are required to mint exact shares (ceiling rounding)
pub fn preview_mint(ctx: Context<VaultView>, shares: u64) -> Result<()> {
    let assets = ctx.accounts.snapshot().preview_mint(shares)?;
    set_return_data(&assets.to_le_bytes());
    Ok(())
}

/// Preview how many shares must be burned to withdraw exact assets (ceiling rounding)
pub fn preview_withdraw(ctx: Context<VaultView>, assets: u64) -> Result<()> {
    let shares = ctx.accounts.snapshot().preview_withdraw(assets)?;
    set_return_data(&shares.to_le_bytes());
    Ok(())
}

/// Preview how many assets would be received for redeeming shares (floor rounding)
pub fn preview_redeem(ctx: Context<VaultView>, shares: u64) -> Result<()> {
    let assets = ctx.accounts.snapshot().preview_redeem(shares)?;
    set_return_data(&assets.to_le_bytes());
    Ok(())
}

/// Convert assets to shares using floor rounding
pub fn convert_to_shares_view(ctx: Context<VaultView>, assets: u64) -> Result<()> {
    let shares = ctx.accounts.snapshot().convert_to_shares(assets)?;
    set_return_data(&shares.to_le_bytes());
    Ok(())
}

/// Convert shares to assets using floor rounding
pub fn convert_to_assets_view(ctx: Context<VaultView>, shares: u64) -> Result<()> {
    let assets = ctx.accounts.snapshot().convert_to_assets(shares)?;
    set_return_data(&assets.to_le_bytes());
    Ok(())
}

/// Get total assets held by the vault (live asset account balance)
pub fn get_total_assets(ctx: Context<VaultView>) -> Result<()> {
    set_return_data(&ctx.accounts.asset_vault.amount.to_le_bytes());
    Ok(())
}

/// Pause flag as a single byte (1 = paused)
pub fn is_paused(ctx: Context<VaultView>) -> Result<()> {
    set_return_data(&[u8::from(ctx.accounts.vault.paused)]);
    Ok(())
}

// Max queries return 0 for the zero key or while paused, u64::MAX otherwise.

pub fn max_deposit(ctx: Context<VaultView>, receiver: Pubkey) -> Result<()> {
    let max = ctx.accounts.snapshot().max_deposit(&receiver);
    set_return_data(&max.to_le_bytes());
    Ok(())
}

pub fn max_mint(ctx: Context<VaultView>, receiver: Pubkey) -> Result<()> {
    let max = ctx.accounts.snapshot().max_mint(&receiver);
    set_return_data(&max.to_le_bytes());
    Ok(())
}

/// Not limited by the owner's share balance
pub fn max_withdraw(ctx: Context<VaultView>, owner: Pubkey) -> Result<()> {
    let max = ctx.accounts.snapshot().max_withdraw(&owner);
    set_return_data(&max.to_le_bytes());
    Ok(())
}

/// Not limited by the owner's share balance
pub fn max_redeem(ctx: Context<VaultView>, owner: Pubkey) -> Result<()> {
    let max = ctx.accounts.snapshot().max_redeem(&owner);
    set_return_data(&max.to_le_bytes());
    Ok(())
}
