//! Account sub-client — profile (TTL-cached) and coin info.

use crate::client::VaultexClient;
use crate::domain::account::{CoinInfo, Profile};
use crate::error::SdkError;
use std::time::Instant;

pub struct Account<'a> {
    pub(crate) client: &'a VaultexClient,
}

impl<'a> Account<'a> {
    /// The user's profile. Uses a TTL cache — the KYC flag is consulted on
    /// every withdrawal and rarely changes.
    pub async fn profile(&self) -> Result<Profile, SdkError> {
        {
            let cache = self.client.profile_cache.read().await;
            if let Some((profile, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.profile_cache_ttl {
                    return Ok(profile.clone());
                }
            }
        }

        let resp = self.client.http.get_profile().await?;
        let profile = Profile {
            user_id: resp.user_id,
            kyc_verification: resp.kyc_verification,
            vip_tier: resp.vip_tier,
        };
        *self.client.profile_cache.write().await = Some((profile.clone(), Instant::now()));
        Ok(profile)
    }

    /// Drop the cached profile (e.g. after KYC review finishes).
    pub async fn invalidate_profile(&self) {
        *self.client.profile_cache.write().await = None;
    }

    /// Reference data for a coin: current price and network withdrawal
    /// minimum. Never cached.
    pub async fn coin_info(&self, coin_name: &str) -> Result<CoinInfo, SdkError> {
        let resp = self.client.http.get_coin_info(coin_name).await?;
        Ok(CoinInfo {
            coin_id: resp.coin_id,
            coin_name: resp.coin_name,
            price_usd: resp.price_usd,
            min_withdrawal: resp.min_withdrawal,
        })
    }
}
