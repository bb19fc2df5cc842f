use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use single_vault::{accounting::VaultSnapshot, error::VaultError};
use trident_fuzz::fuzzing::*;

const HOLDERS: usize = 3;

/// Vault state tracking for invariant checks
#[derive(Default, Clone)]
struct VaultTracker {
    initialized: bool,
    paused: bool,
    total_assets: u64,
    holder_shares: [u64; HOLDERS],
}

impl VaultTracker {
    fn snapshot(&self) -> VaultSnapshot {
        VaultSnapshot {
            total_assets: self.total_assets,
            total_supply: self.holder_shares.iter().sum(),
            paused: self.paused,
        }
    }
}

#[derive(FuzzTestMethods)]
struct FuzzTest {
    /// Driven by the derive; flows only touch the tracker
    trident: Trident,
    vault_tracker: VaultTracker,
}

#[flow_executor]
impl FuzzTest {
    fn new() -> Self {
        Self {
            trident: Trident::default(),
            vault_tracker: VaultTracker::default(),
        }
    }

    #[init]
    fn start(&mut self) {
        self.vault_tracker = VaultTracker::default();
    }

    #[flow]
    fn flow_initialize(&mut self) {
        if self.vault_tracker.initialized {
            return;
        }
        self.vault_tracker.initialized = true;
    }

    #[flow]
    fn flow_toggle_pause(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }
        self.vault_tracker.paused = rand::random::<u8>() % 4 == 0;
    }

    /// Direct asset transfer into the vault (no shares minted)
    #[flow]
    fn flow_inject_profit(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }
        let profit = rand::random::<u64>() % 1_000_000_000;
        self.vault_tracker.total_assets += profit;
    }

    #[flow]
    fn flow_deposit(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let holder = Self::pick_holder();
        let assets = rand::random::<u64>() % 1_000_000_000_000;
        let before = self.vault_tracker.snapshot();

        match before.deposit(assets, &Self::holder_key(holder)) {
            Ok(shares) => {
                self.vault_tracker.total_assets += assets;
                self.vault_tracker.holder_shares[holder] += shares;

                // Invariant: immediate redeem never returns more than was deposited
                let back = self.vault_tracker.snapshot().preview_redeem(shares).unwrap();
                assert!(back <= assets, "Invariant: deposit/redeem round-trip created assets");
            }
            Err(err) => Self::assert_expected_rejection(err, assets, before.paused),
        }
    }

    #[flow]
    fn flow_mint(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let holder = Self::pick_holder();
        let shares = rand::random::<u64>() % 1_000_000_000_000;
        let before = self.vault_tracker.snapshot();

        match before.mint(shares, &Self::holder_key(holder)) {
            Ok(assets) => {
                // Invariant: minting never costs less than the floor conversion
                assert!(assets >= before.convert_to_assets(shares).unwrap());

                // No real caller holds that much of the asset
                let Some(total_assets) = before.total_assets.checked_add(assets) else {
                    return;
                };
                self.vault_tracker.total_assets = total_assets;
                self.vault_tracker.holder_shares[holder] += shares;
            }
            Err(err) if err == Error::from(VaultError::MathOverflow) => {}
            Err(err) => Self::assert_expected_rejection(err, shares, before.paused),
        }
    }

    #[flow]
    fn flow_withdraw(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let holder = Self::pick_holder();
        let owned = self.vault_tracker.holder_shares[holder];
        let before = self.vault_tracker.snapshot();
        let claim = before.convert_to_assets(owned).unwrap();
        let assets = rand::random::<u64>() % (claim + 1);

        match before.withdraw(assets, owned) {
            Ok(shares) => {
                assert!(shares <= owned, "Invariant: burned more shares than owned");
                assert!(assets <= before.total_assets, "Invariant: paid out more than vault holds");

                self.vault_tracker.holder_shares[holder] -= shares;
                self.vault_tracker.total_assets -= assets;
            }
            Err(err) => {
                assert!(before.paused, "Invariant: owned claim must be withdrawable");
                let expected: Error = VaultError::VaultPaused.into();
                assert_eq!(err, expected);
            }
        }
    }

    #[flow]
    fn flow_redeem(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let holder = Self::pick_holder();
        let owned = self.vault_tracker.holder_shares[holder];
        let shares = rand::random::<u64>() % (owned + 1);
        let before = self.vault_tracker.snapshot();

        match before.redeem(shares, &Self::holder_key(holder)) {
            Ok(assets) => {
                assert!(assets <= before.total_assets, "Invariant: paid out more than vault holds");

                self.vault_tracker.holder_shares[holder] -= shares;
                self.vault_tracker.total_assets -= assets;
            }
            Err(err) => Self::assert_expected_rejection(err, shares, before.paused),
        }
    }

    /// Max queries follow the pause flag only
    #[flow]
    fn flow_max_queries(&mut self) {
        let snapshot = self.vault_tracker.snapshot();
        let key = Self::holder_key(Self::pick_holder());
        let expected = if snapshot.paused { 0 } else { u64::MAX };

        assert_eq!(snapshot.max_deposit(&key), expected);
        assert_eq!(snapshot.max_mint(&key), expected);
        assert_eq!(snapshot.max_withdraw(&key), expected);
        assert_eq!(snapshot.max_redeem(&key), expected);
        assert_eq!(snapshot.max_deposit(&Pubkey::default()), 0);
    }

    #[end]
    fn end(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let snapshot = self.vault_tracker.snapshot();

        // Invariant: outstanding shares are always backed by assets
        if snapshot.total_supply > 0 {
            assert!(snapshot.total_assets > 0, "Invariant: shares outstanding with no assets");
        } else {
            assert_eq!(snapshot.preview_deposit(12_345).unwrap(), 12_345);
        }

        // Invariant: holders together never claim more than the vault holds
        let claimed: u64 = self
            .vault_tracker
            .holder_shares
            .iter()
            .map(|shares| snapshot.convert_to_assets(*shares).unwrap())
            .sum();
        assert!(claimed <= snapshot.total_assets, "Invariant: claims exceed vault assets");
    }

    fn pick_holder() -> usize {
        rand::random::<usize>() % HOLDERS
    }

    fn holder_key(holder: usize) -> Pubkey {
        Pubkey::new_from_array([holder as u8 + 1; 32])
    }

    /// Only zero amounts and pause can reject a deposit, mint or redeem here
    fn assert_expected_rejection(err: Error, amount: u64, paused: bool) {
        let expected: Error = if amount == 0 {
            VaultError::ZeroAmount.into()
        } else {
            assert!(paused, "Invariant: unexpected rejection while active");
            VaultError::VaultPaused.into()
        };
        assert_eq!(err, expected);
    }
}

fn main() {
    // Run 1000 iterations with up to 100 flows per iteration
    FuzzTest::fuzz(1000, 100);
}
