//! Wire types for withdrawal endpoints (REST).

use super::{WithdrawalStatus, WithdrawalTx};
use crate::shared::{serde_util, CoinId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response for `GET /api/withdrawals`.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalsResponse {
    pub withdrawals: Vec<WithdrawalTxResponse>,
}

/// A withdrawal row as the ledger sends it. `created_at` arrives as epoch
/// milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalTxResponse {
    pub id: String,
    pub coin_id: CoinId,
    pub amount: Decimal,
    pub status: WithdrawalStatus,
    #[serde(with = "serde_util::timestamp_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<WithdrawalTxResponse> for WithdrawalTx {
    fn from(resp: WithdrawalTxResponse) -> Self {
        WithdrawalTx {
            id: resp.id,
            coin_id: resp.coin_id,
            amount: resp.amount,
            status: resp.status,
            created_at: resp.created_at,
        }
    }
}

/// Request body for `POST /api/withdrawals`.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalSubmitBody {
    pub coin_id: CoinId,
    pub amount: Decimal,
    pub address: String,
}

/// Ledger response to a withdrawal submission.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalSubmitResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub withdrawal_id: Option<String>,
}

impl WithdrawalSubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
