//! Orders sub-client — code lookup, redemption, user order lists.

use crate::client::VaultexClient;
use crate::domain::order::convert::OrderConvertError;
use crate::domain::order::wire::RedeemBody;
use crate::domain::order::{Instrument, TradeOrder};
use crate::error::{HttpError, RedemptionError, SdkError};
use crate::shared::OrderCode;

pub struct Orders<'a> {
    pub(crate) client: &'a VaultexClient,
}

impl<'a> Orders<'a> {
    /// Fetch the order behind a code so the user can review it before
    /// confirming. Malformed input is rejected locally without a network
    /// call.
    pub async fn lookup(&self, input: &str) -> Result<TradeOrder, SdkError> {
        let code =
            OrderCode::parse(input).map_err(|e| SdkError::Validation(e.to_string()))?;

        let resp = match self.client.http.get_order_by_code(&code).await {
            Ok(resp) => resp,
            Err(HttpError::NotFound(_)) => {
                return Err(SdkError::Redemption(RedemptionError::NotFound))
            }
            Err(e) => return Err(e.into()),
        };
        resp.try_into()
            .map_err(|e: OrderConvertError| SdkError::Validation(e.to_string()))
    }

    /// Redeem a code, attaching the order's trade parameters to the
    /// caller's account.
    ///
    /// The ledger's checks are authoritative and not re-derived here: the
    /// code must exist, the order must be `pending` and unexpired, and the
    /// caller must be neither the owner nor an existing follower. On
    /// success the ledger returns the fully resolved order (status already
    /// `pending_profit` for this follower) and both the wallet snapshot
    /// and the order list are refreshed before this returns.
    ///
    /// Single-flight: one redemption request at a time, keyed by the
    /// action (the UI exposes one redemption field), not by code.
    pub async fn redeem(&self, input: &str) -> Result<TradeOrder, SdkError> {
        let code =
            OrderCode::parse(input).map_err(|e| SdkError::Validation(e.to_string()))?;
        let _flight = self.client.flags.acquire_redeem()?;

        let resp = self
            .client
            .http
            .redeem_order(&RedeemBody { code: code.clone() })
            .await?;

        if !resp.is_success() {
            let message = resp.message.unwrap_or_default();
            let err =
                RedemptionError::from_ledger_code(resp.code.as_deref().unwrap_or(""), &message);
            tracing::debug!(code = %code, error = %err, "Redemption rejected by ledger");
            return Err(err.into());
        }

        let order: TradeOrder = resp
            .order
            .ok_or_else(|| {
                SdkError::Other("ledger reported success without an order payload".to_string())
            })?
            .try_into()
            .map_err(|e: OrderConvertError| SdkError::Validation(e.to_string()))?;

        self.client.wallets().refresh().await?;
        self.list(order.instrument()).await?;
        tracing::info!(code = %order.code, instrument = %order.instrument(), "Order redeemed");
        Ok(order)
    }

    /// Fetch the user's orders for one instrument and install them in the
    /// shared order list.
    pub async fn list(&self, instrument: Instrument) -> Result<Vec<TradeOrder>, SdkError> {
        let resp = self.client.http.get_user_orders(instrument).await?;
        let orders: Vec<TradeOrder> = resp
            .orders
            .into_iter()
            .map(TradeOrder::try_from)
            .collect::<Result<_, _>>()
            .map_err(|e: OrderConvertError| SdkError::Validation(e.to_string()))?;

        self.client
            .user_orders
            .write()
            .await
            .replace(instrument, orders.clone());
        Ok(orders)
    }

    /// The cached order list for one instrument.
    pub async fn cached(&self, instrument: Instrument) -> Vec<TradeOrder> {
        self.client.user_orders.read().await.get(instrument).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::VaultexClient;

    fn offline_client() -> VaultexClient {
        VaultexClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_redeem_rejects_empty_code_locally() {
        let client = offline_client();
        let err = client.orders().redeem("  ").await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg.contains("empty")));
    }

    #[tokio::test]
    async fn test_redeem_rejects_short_code_locally() {
        let client = offline_client();
        let err = client.orders().redeem("AB1").await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_lookup_rejects_malformed_code_locally() {
        let client = offline_client();
        let err = client.orders().lookup("ab 12!").await.unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
