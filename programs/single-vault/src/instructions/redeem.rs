use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::{self, Burn, Token2022},
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::VAULT_SEED,
    events::Withdraw as WithdrawEvent,
    state::Vault,
};

#[derive(Accounts)]
pub struct Redeem<'info> {
    /// Share owner, or a delegate approved on the owner's shares account
    #[account(mut)]
    pub caller: Signer<'info>,

    pub vault: Account<'info, Vault>,

    #[account(
        constraint = asset_mint.key() == vault.asset_mint,
    )]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = asset_vault.key() == vault.asset_vault,
    )]
    pub asset_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = shares_mint.key() == vault.shares_mint,
    )]
    pub shares_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Only used to bind the shares account below
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = owner_shares_account.mint == vault.shares_mint,
        constraint = owner_shares_account.owner == owner.key(),
    )]
    pub owner_shares_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Any key may receive assets; the zero key is rejected in the handler
    pub receiver: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = caller,
        associated_token::mint = asset_mint,
        associated_token::authority = receiver,
        associated_token::token_program = asset_token_program,
    )]
    pub receiver_asset_account: InterfaceAccount<'info, TokenAccount>,

    pub asset_token_program: Interface<'info, TokenInterface>,
    pub token_2022_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Redeem exact shares for assets (floor rounding - protects vault)
pub fn handler(ctx: Context<Redeem>, shares: u64) -> Result<()> {
    let receiver = ctx.accounts.receiver.key();
    let snapshot = ctx
        .accounts
        .vault
        .snapshot(ctx.accounts.asset_vault.amount, ctx.accounts.shares_mint.supply);

    let assets = snapshot.redeem(shares, &receiver)?;

    // Burn shares from owner; an oversized burn fails inside the token program
    token_2022::burn(
        CpiContext::new(
            ctx.accounts.token_2022_program.to_account_info(),
            Burn {
                mint: ctx.accounts.shares_mint.to_account_info(),
                from: ctx.accounts.owner_shares_account.to_account_info(),
                authority: ctx.accounts.caller.to_account_info(),
            },
        ),
        shares,
    )?;

    // Transfer assets from vault to receiver
    let asset_mint_key = ctx.accounts.vault.asset_mint;
    let vault_id_bytes = ctx.accounts.vault.vault_id.to_le_bytes();
    let bump = ctx.accounts.vault.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[
        VAULT_SEED,
        asset_mint_key.as_ref(),
        vault_id_bytes.as_ref(),
        &[bump],
    ]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.asset_token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.asset_vault.to_account_info(),
                to: ctx.accounts.receiver_asset_account.to_account_info(),
                mint: ctx.accounts.asset_mint.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            signer_seeds,
        ),
        assets,
        ctx.accounts.asset_mint.decimals,
    )?;

    emit!(WithdrawEvent::new(
        ctx.accounts.vault.key(),
        ctx.accounts.caller.key(),
        receiver,
        ctx.accounts.owner.key(),
        assets,
        shares,
    ));

    Ok(())
}
