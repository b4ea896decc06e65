//! Withdrawal domain — transaction list, submission, minimum rule.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Floor on withdrawals in USD equivalent.
pub const MIN_WITHDRAWAL_USD: i64 = 25;

// ─── WithdrawalStatus ────────────────────────────────────────────────────────

/// Status of a withdrawal transaction as the ledger reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Declined,
}

impl WithdrawalStatus {
    /// Still in the ledger's hands. Outstanding withdrawals block
    /// exchange→trading transfers.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

// ─── WithdrawalTx ────────────────────────────────────────────────────────────

/// A withdrawal transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalTx {
    pub id: String,
    pub coin_id: CoinId,
    pub amount: Decimal,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
}

// ─── Minimum rule ────────────────────────────────────────────────────────────

/// Minimum withdrawal for a coin: the larger of the network minimum and
/// the $25 equivalent at the current price. Client-side UX value; the
/// ledger enforces its own.
pub fn minimum_withdrawal(network_minimum: Decimal, coin_price_usd: Decimal) -> Decimal {
    if coin_price_usd <= Decimal::ZERO {
        return network_minimum;
    }
    let usd_floor = Decimal::from(MIN_WITHDRAWAL_USD) / coin_price_usd;
    network_minimum.max(usd_floor)
}
