//! Wallet state container — app-owned, SDK-provided update logic.

use super::WalletSnapshot;
use crate::shared::{CoinId, Partition};
use rust_decimal::Decimal;

/// Read-through cache of the three partition balance sets.
///
/// The snapshot is only ever replaced as a whole. Installs are guarded by
/// an epoch: a refresh records the epoch it started at, and its result is
/// discarded if anything else (a newer install, or `reset` when the view
/// goes away) advanced the store in the meantime. A stale response is never
/// written back.
#[derive(Debug, Default)]
pub struct WalletStore {
    snapshot: WalletSnapshot,
    epoch: u64,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch to capture before starting a fetch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn snapshot(&self) -> &WalletSnapshot {
        &self.snapshot
    }

    /// Available amount for a coin in a partition; zero when no entry
    /// matches.
    pub fn available_balance(&self, partition: Partition, coin_id: &CoinId) -> Decimal {
        self.snapshot.available_balance(partition, coin_id)
    }

    /// Install a freshly fetched snapshot. `fetched_at_epoch` is the value
    /// of `epoch()` captured before the fetch started. Returns whether the
    /// snapshot was applied; a stale install is discarded untouched.
    pub fn install(&mut self, snapshot: WalletSnapshot, fetched_at_epoch: u64) -> bool {
        if fetched_at_epoch != self.epoch {
            tracing::debug!(
                fetched_at = fetched_at_epoch,
                current = self.epoch,
                "Discarding stale wallet snapshot"
            );
            return false;
        }
        self.snapshot = snapshot;
        self.epoch += 1;
        true
    }

    /// Drop the cached snapshot and invalidate any in-flight refresh.
    /// Called when the owning view ceases to exist.
    pub fn reset(&mut self) {
        self.snapshot = WalletSnapshot::default();
        self.epoch += 1;
    }
}
