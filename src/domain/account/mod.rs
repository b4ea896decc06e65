//! Account domain — user profile and coin reference data.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{CoinId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The user's profile as far as this client needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    /// Withdrawals are refused while this is false.
    pub kyc_verification: bool,
    pub vip_tier: Option<u8>,
}

/// Reference data for one coin. Fetched per request — prices move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub coin_id: CoinId,
    pub coin_name: String,
    pub price_usd: Decimal,
    pub min_withdrawal: Decimal,
}
