//! Wire types for wallet balance responses (REST).

use crate::shared::{CoinId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response for `GET /api/wallets/balances`.
///
/// The ledger returns all three partitions in one payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalancesResponse {
    pub exchange: Vec<BalanceEntry>,
    pub spot: Vec<BalanceEntry>,
    pub futures: Vec<BalanceEntry>,
}

/// A single balance row as the ledger sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceEntry {
    pub user_id: UserId,
    pub coin_id: CoinId,
    pub coin_name: String,
    pub balance: Decimal,
    pub locked_balance: Decimal,
}
