//! Wire types for transfer endpoints (REST).

use super::FeeMode;
use crate::shared::{CoinId, Partition};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the three pair transfer endpoints. The endpoint
/// identifies the unordered pair; `source`/`dest` carry the direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferBody {
    pub coin_id: CoinId,
    pub coin_name: String,
    pub amount: Decimal,
    pub source: Partition,
    pub dest: Partition,
    pub fee_mode: FeeMode,
}

/// Ledger response to a transfer. On success the ledger echoes the split
/// it applied; on error `message` carries the business reason verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub net_amount: Option<Decimal>,
    #[serde(default)]
    pub fee: Option<Decimal>,
}

impl TransferResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Response for `GET /api/users/volume-status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeStatusResponse {
    pub partition: Partition,
    pub total_trading_volume: Decimal,
    pub required_volume: Decimal,
}
