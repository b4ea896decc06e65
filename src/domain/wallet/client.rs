//! Wallets sub-client — snapshot refresh and balance queries.

use crate::client::VaultexClient;
use crate::domain::wallet::{BalanceValidationError, WalletSnapshot};
use crate::error::SdkError;
use crate::shared::{CoinId, Partition};
use rust_decimal::Decimal;

pub struct Wallets<'a> {
    pub(crate) client: &'a VaultexClient,
}

impl<'a> Wallets<'a> {
    /// Fetch all three partitions in one call and install the snapshot
    /// atomically. Every mutating operation in the SDK calls this on
    /// success before reporting completion, so the UI never renders a
    /// stale source or destination balance.
    pub async fn refresh(&self) -> Result<WalletSnapshot, SdkError> {
        let epoch = self.client.wallet_store.read().await.epoch();

        let resp = self.client.http.get_balances().await?;
        let snapshot: WalletSnapshot = resp
            .try_into()
            .map_err(|e: BalanceValidationError| SdkError::Validation(e.to_string()))?;

        self.client
            .wallet_store
            .write()
            .await
            .install(snapshot.clone(), epoch);
        Ok(snapshot)
    }

    /// Clone of the current cached snapshot.
    pub async fn snapshot(&self) -> WalletSnapshot {
        self.client.wallet_store.read().await.snapshot().clone()
    }

    /// Available amount for a coin in a partition; zero when no entry
    /// matches the cached snapshot.
    pub async fn available_balance(&self, partition: Partition, coin_id: &CoinId) -> Decimal {
        self.client
            .wallet_store
            .read()
            .await
            .available_balance(partition, coin_id)
    }

    /// Drop the cached snapshot and discard any in-flight refresh result.
    /// Call when the owning view goes away.
    pub async fn reset(&self) {
        self.client.wallet_store.write().await.reset();
    }
}
