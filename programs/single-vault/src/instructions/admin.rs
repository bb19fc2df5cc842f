use anchor_lang::prelude::*;

use crate::{
    events::{OwnershipTransferred, Paused, Unpaused},
    state::Vault,
};

#[derive(Accounts)]
pub struct Admin<'info> {
    /// Checked against `vault.owner` in each handler so a rejection names the caller
    pub caller: Signer<'info>,

    #[account(mut)]
    pub vault: Account<'info, Vault>,
}

/// Pause all vault operations (emergency circuit breaker)
pub fn set_pause(ctx: Context<Admin>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let vault = &mut ctx.accounts.vault;
    vault.set_paused(&caller, true)?;

    emit!(Paused {
        vault: vault.key(),
        account: caller,
    });

    msg!("Vault paused by {}", caller);
    Ok(())
}

/// Resume vault operations
pub fn set_unpause(ctx: Context<Admin>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let vault = &mut ctx.accounts.vault;
    vault.set_paused(&caller, false)?;

    emit!(Unpaused {
        vault: vault.key(),
        account: caller,
    });

    msg!("Vault unpaused by {}", caller);
    Ok(())
}

/// Hand the owner role to a new address
pub fn transfer_ownership(ctx: Context<Admin>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let vault = &mut ctx.accounts.vault;
    let previous_owner = vault.transfer_owner(&caller, new_owner)?;

    emit!(OwnershipTransferred {
        vault: vault.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
