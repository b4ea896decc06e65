//! Wire types for account endpoints (REST).

use crate::shared::{CoinId, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Response for `GET /api/users/profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user_id: UserId,
    pub kyc_verification: bool,
    #[serde(default)]
    pub vip_tier: Option<u8>,
}

/// Response for `GET /api/coins/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinInfoResponse {
    pub coin_id: CoinId,
    pub coin_name: String,
    pub price_usd: Decimal,
    pub min_withdrawal: Decimal,
}
