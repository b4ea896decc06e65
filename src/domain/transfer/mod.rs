//! Transfer domain — inter-partition moves with volume gating and penalty
//! fees.

#[cfg(feature = "http")]
pub mod client;
pub mod gate;
pub mod wire;

use crate::shared::{CoinId, Partition};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use gate::{penalty_split, GateDecision, VolumeStatus};

// ─── FeeMode ─────────────────────────────────────────────────────────────────

/// How an unmet volume requirement is handled.
///
/// `Penalty` is only meaningful when re-submitting a trading→exchange
/// transfer after the gate returned `VolumeUnmet` and the user accepted the
/// deduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeMode {
    #[default]
    None,
    Penalty,
}

// ─── TransferRequest ─────────────────────────────────────────────────────────

/// A request to move funds between two partitions.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub coin_id: CoinId,
    pub coin_name: String,
    pub amount: Decimal,
    pub source: Partition,
    pub dest: Partition,
    pub fee_mode: FeeMode,
}

impl TransferRequest {
    /// Which gates apply depends on direction, not on the endpoint.
    pub fn direction(&self) -> TransferDirection {
        match (self.source, self.dest) {
            (Partition::Exchange, _) => TransferDirection::ExchangeToTrading,
            (_, Partition::Exchange) => TransferDirection::TradingToExchange,
            _ => TransferDirection::CrossTrading,
        }
    }

    /// The unordered endpoint pair; `None` when source == dest.
    pub fn pair(&self) -> Option<PartitionPair> {
        PartitionPair::of(self.source, self.dest)
    }
}

// ─── TransferDirection ───────────────────────────────────────────────────────

/// Direction classification of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    /// exchange → spot/futures. Subject to the pending-withdrawal guard.
    ExchangeToTrading,
    /// spot/futures → exchange. Subject to the volume gate.
    TradingToExchange,
    /// spot ↔ futures. Never gated.
    CrossTrading,
}

// ─── PartitionPair ───────────────────────────────────────────────────────────

/// The unordered pair of partitions a transfer touches.
///
/// Each pair maps to exactly one remote endpoint; direction travels in the
/// request body. This guarantees exactly one network call per transfer
/// regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionPair {
    ExchangeSpot,
    ExchangeFutures,
    SpotFutures,
}

impl PartitionPair {
    pub fn of(a: Partition, b: Partition) -> Option<Self> {
        use Partition::*;
        match (a, b) {
            (Exchange, Spot) | (Spot, Exchange) => Some(Self::ExchangeSpot),
            (Exchange, Futures) | (Futures, Exchange) => Some(Self::ExchangeFutures),
            (Spot, Futures) | (Futures, Spot) => Some(Self::SpotFutures),
            _ => None,
        }
    }
}

// ─── TransferOutcome ─────────────────────────────────────────────────────────

/// Result of a transfer attempt. A blocked gate is a decision for the user
/// (cancel, accept the penalty, or wait), not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// The ledger applied the transfer. `net_amount + fee == amount`.
    Completed { net_amount: Decimal, fee: Decimal },
    /// A gate stopped the transfer before any network call to the transfer
    /// endpoint.
    Blocked(TransferBlock),
}

/// Which gate stopped the transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferBlock {
    /// Trading volume below the partition's requirement. Re-invoke with
    /// `FeeMode::Penalty` to force completion at a 20% deduction.
    VolumeUnmet { remaining: Decimal },
    /// An outstanding withdrawal request blocks exchange→trading moves
    /// until it settles or is cancelled.
    PendingWithdrawal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source: Partition, dest: Partition) -> TransferRequest {
        TransferRequest {
            coin_id: CoinId::from("usdt"),
            coin_name: "USDT".to_string(),
            amount: Decimal::new(100, 0),
            source,
            dest,
            fee_mode: FeeMode::None,
        }
    }

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(
            PartitionPair::of(Partition::Exchange, Partition::Spot),
            PartitionPair::of(Partition::Spot, Partition::Exchange)
        );
        assert_eq!(
            PartitionPair::of(Partition::Futures, Partition::Exchange),
            Some(PartitionPair::ExchangeFutures)
        );
        assert_eq!(
            PartitionPair::of(Partition::Spot, Partition::Futures),
            Some(PartitionPair::SpotFutures)
        );
    }

    #[test]
    fn test_pair_rejects_same_partition() {
        assert_eq!(PartitionPair::of(Partition::Spot, Partition::Spot), None);
    }

    #[test]
    fn test_direction_classification() {
        assert_eq!(
            request(Partition::Exchange, Partition::Futures).direction(),
            TransferDirection::ExchangeToTrading
        );
        assert_eq!(
            request(Partition::Spot, Partition::Exchange).direction(),
            TransferDirection::TradingToExchange
        );
        assert_eq!(
            request(Partition::Futures, Partition::Spot).direction(),
            TransferDirection::CrossTrading
        );
    }
}
