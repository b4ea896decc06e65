//! Wallet domain — partition balances and the client-side snapshot store.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::{CoinId, Partition, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::BalanceValidationError;
pub use state::WalletStore;

/// A validated balance entry for one coin in one partition.
///
/// Invariants enforced at conversion: `balance >= 0` and
/// `0 <= locked_balance <= balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub user_id: UserId,
    pub coin_id: CoinId,
    pub coin_name: String,
    pub partition: Partition,
    pub balance: Decimal,
    pub locked_balance: Decimal,
}

impl Balance {
    /// Amount the user can actually move: `balance - locked_balance`.
    pub fn available(&self) -> Decimal {
        self.balance - self.locked_balance
    }
}

/// The full balance picture across all three partitions.
///
/// Always replaced as a whole (never partition-by-partition) so a reader
/// can never observe a mix of old and new partitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSnapshot {
    pub exchange: Vec<Balance>,
    pub spot: Vec<Balance>,
    pub futures: Vec<Balance>,
}

impl WalletSnapshot {
    pub fn partition(&self, partition: Partition) -> &[Balance] {
        match partition {
            Partition::Exchange => &self.exchange,
            Partition::Spot => &self.spot,
            Partition::Futures => &self.futures,
        }
    }

    /// Available amount for a coin in a partition; zero when no entry
    /// matches.
    pub fn available_balance(&self, partition: Partition, coin_id: &CoinId) -> Decimal {
        self.partition(partition)
            .iter()
            .find(|b| &b.coin_id == coin_id)
            .map(|b| b.available())
            .unwrap_or(Decimal::ZERO)
    }
}
