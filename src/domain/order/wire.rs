//! Wire types for order endpoints (REST).

use crate::shared::{serde_util, OrderCode, Side, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A full order payload as the ledger sends it. `expires_at` arrives as
/// epoch milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub code: String,
    pub symbol: String,
    pub side: Side,
    pub entry_price: Decimal,
    pub target_price: Decimal,
    pub profit_percentage: Decimal,
    pub quantity: Decimal,
    pub notional_value: Decimal,
    pub status: String,
    #[serde(with = "serde_util::timestamp_ms")]
    pub expires_at: DateTime<Utc>,
    pub owner_user_id: UserId,
    #[serde(default)]
    pub follower_user_ids: Vec<UserId>,
    #[serde(default)]
    pub leverage: Option<u32>,
    #[serde(default)]
    pub margin: Option<Decimal>,
    #[serde(default)]
    pub liquidation_price: Option<Decimal>,
}

/// Request body for `POST /api/orders/redeem`.
#[derive(Debug, Clone, Serialize)]
pub struct RedeemBody {
    pub code: OrderCode,
}

/// Ledger response to a redemption attempt. On failure `code` carries the
/// machine-readable reason and `message` the human-readable one; both are
/// surfaced verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct RedeemResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order: Option<OrderResponse>,
}

impl RedeemResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Response for `GET /api/users/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}
