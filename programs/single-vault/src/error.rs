use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Receiver must not be the zero address")]
    ZeroAddress,

    #[msg("Vault is paused")]
    VaultPaused,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Insufficient shares balance")]
    InsufficientShares,

    #[msg("Unauthorized - caller is not vault owner")]
    Unauthorized,

    #[msg("New owner must not be the zero address")]
    InvalidOwner,
}
