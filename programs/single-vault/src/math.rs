use anchor_lang::prelude::*;

use crate::error::VaultError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    Floor,
    Ceiling,
}

/// Convert assets to shares at the vault's current exchange rate.
///
/// Formula: shares = assets × total_shares / total_assets
///
/// An empty vault (no shares outstanding) converts 1:1.
pub fn convert_to_shares(
    assets: u64,
    total_assets: u64,
    total_shares: u64,
    rounding: Rounding,
) -> Result<u64> {
    if total_shares == 0 {
        return Ok(assets);
    }

    mul_div(assets, total_shares, total_assets, rounding)
}

/// Convert shares to assets at the vault's current exchange rate.
///
/// Formula: assets = shares × total_assets / total_shares
pub fn convert_to_assets(
    shares: u64,
    total_assets: u64,
    total_shares: u64,
    rounding: Rounding,
) -> Result<u64> {
    if total_shares == 0 {
        return Ok(shares);
    }

    mul_div(shares, total_assets, total_shares, rounding)
}

/// Safe multiplication then division with configurable rounding.
///
/// Computes: (value × numerator) / denominator
/// Uses u128 intermediate to prevent overflow.
pub fn mul_div(value: u64, numerator: u64, denominator: u64, rounding: Rounding) -> Result<u64> {
    require!(denominator > 0, VaultError::DivisionByZero);

    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(VaultError::MathOverflow)?;

    let denom = denominator as u128;
    let quotient = product / denom;
    let result = match rounding {
        Rounding::Floor => quotient,
        Rounding::Ceiling if product % denom != 0 => quotient + 1,
        Rounding::Ceiling => quotient,
    };

    require!(result <= u64::MAX as u128, VaultError::MathOverflow);
    Ok(result as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: u64 = 1_000_000_000;

    #[test]
    fn test_mul_div_floor() {
        // 100 * 3 / 2 = 150 (floor)
        assert_eq!(mul_div(100, 3, 2, Rounding::Floor).unwrap(), 150);
        // 100 * 1 / 3 = 33 (floor)
        assert_eq!(mul_div(100, 1, 3, Rounding::Floor).unwrap(), 33);
    }

    #[test]
    fn test_mul_div_ceiling() {
        // 100 * 3 / 2 = 150 (exact, no bump)
        assert_eq!(mul_div(100, 3, 2, Rounding::Ceiling).unwrap(), 150);
        // 100 * 1 / 3 = 34 (ceiling)
        assert_eq!(mul_div(100, 1, 3, Rounding::Ceiling).unwrap(), 34);
    }

    #[test]
    fn test_empty_vault_is_identity() {
        assert_eq!(convert_to_shares(1_000_000, 0, 0, Rounding::Floor).unwrap(), 1_000_000);
        assert_eq!(convert_to_shares(1_000_000, 0, 0, Rounding::Ceiling).unwrap(), 1_000_000);
        assert_eq!(convert_to_assets(1_000_000, 0, 0, Rounding::Floor).unwrap(), 1_000_000);
        assert_eq!(convert_to_assets(1_000_000, 0, 0, Rounding::Ceiling).unwrap(), 1_000_000);
    }

    #[test]
    fn test_empty_supply_ignores_stray_assets() {
        // Assets sent to a vault with no shares do not change the first depositor's rate
        assert_eq!(convert_to_shares(5, 1_000_000, 0, Rounding::Floor).unwrap(), 5);
    }

    #[test]
    fn test_profit_doubles_asset_per_share() {
        // 200 assets backing 100 shares
        let total_assets = 200 * TOKEN;
        let total_shares = 100 * TOKEN;

        let shares = convert_to_shares(200 * TOKEN, total_assets, total_shares, Rounding::Floor).unwrap();
        assert_eq!(shares, 100 * TOKEN);

        let assets = convert_to_assets(50 * TOKEN, total_assets, total_shares, Rounding::Floor).unwrap();
        assert_eq!(assets, 100 * TOKEN);
    }

    #[test]
    fn test_rounding_favors_vault() {
        // 1000 assets backing 3 shares: nothing divides evenly
        let (total_assets, total_shares) = (1000, 3);

        // deposit: floor (user gets less)
        let deposit_shares = convert_to_shares(100, total_assets, total_shares, Rounding::Floor).unwrap();
        // withdraw: ceiling shares (user burns more)
        let withdraw_shares = convert_to_shares(100, total_assets, total_shares, Rounding::Ceiling).unwrap();
        assert_eq!(deposit_shares, 0);
        assert_eq!(withdraw_shares, 1);

        // redeem: floor (user gets less)
        let redeem_assets = convert_to_assets(1, total_assets, total_shares, Rounding::Floor).unwrap();
        // mint: ceiling assets (user pays more)
        let mint_assets = convert_to_assets(1, total_assets, total_shares, Rounding::Ceiling).unwrap();
        assert_eq!(redeem_assets, 333);
        assert_eq!(mint_assets, 334);
    }

    #[test]
    fn test_drained_vault_with_shares_fails() {
        let result = convert_to_shares(100, 0, 100, Rounding::Floor);
        assert_eq!(result.unwrap_err(), VaultError::DivisionByZero.into());
    }

    #[test]
    fn test_division_by_zero() {
        let result = mul_div(100, 100, 0, Rounding::Floor);
        assert!(result.is_err());
    }

    #[test]
    fn test_result_overflow() {
        // 2x rate on a near-max amount leaves the u64 range
        let result = convert_to_assets(u64::MAX, 2, 1, Rounding::Floor);
        assert_eq!(result.unwrap_err(), VaultError::MathOverflow.into());
    }

    #[test]
    fn test_max_values() {
        // Test with large but valid values
        let large = u64::MAX / 2;
        let result = convert_to_shares(large, large, large, Rounding::Floor);
        assert_eq!(result.unwrap(), large);
    }
}
