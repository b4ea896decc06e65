//! Withdrawals sub-client — list and submit.

use crate::client::VaultexClient;
use crate::domain::withdrawal::wire::WithdrawalSubmitBody;
use crate::domain::withdrawal::{minimum_withdrawal, WithdrawalTx};
use crate::error::SdkError;
use crate::shared::{CoinId, Partition};
use rust_decimal::Decimal;

pub struct Withdrawals<'a> {
    pub(crate) client: &'a VaultexClient,
}

impl<'a> Withdrawals<'a> {
    /// The user's withdrawal transactions, newest first as the ledger
    /// orders them. Also feeds the pending-withdrawal transfer guard.
    pub async fn list(&self) -> Result<Vec<WithdrawalTx>, SdkError> {
        let resp = self.client.http.get_withdrawals().await?;
        Ok(resp.withdrawals.into_iter().map(Into::into).collect())
    }

    /// Submit a withdrawal from the exchange partition.
    ///
    /// Refused locally (and again by the ledger) when the account has not
    /// passed KYC, when the amount is below the coin's minimum — the
    /// larger of the network minimum and the $25 equivalent — or when it
    /// exceeds the available exchange balance. The ledger's own
    /// enforcement is authoritative; these checks only save a round trip.
    pub async fn submit(
        &self,
        coin_id: &CoinId,
        coin_name: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<String, SdkError> {
        let _flight = self.client.flags.acquire_withdrawal()?;

        if amount <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "withdrawal amount must be positive, got {}",
                amount
            )));
        }
        if address.trim().is_empty() {
            return Err(SdkError::Validation(
                "withdrawal address must not be empty".to_string(),
            ));
        }

        let profile = self.client.account().profile().await?;
        if !profile.kyc_verification {
            return Err(SdkError::Validation(
                "withdrawals require KYC verification".to_string(),
            ));
        }

        let coin = self.client.http.get_coin_info(coin_name).await?;
        let minimum = minimum_withdrawal(coin.min_withdrawal, coin.price_usd);
        if amount < minimum {
            return Err(SdkError::Validation(format!(
                "amount {} is below the minimum withdrawal {} {}",
                amount, minimum, coin_name
            )));
        }

        let available = self
            .client
            .wallets()
            .available_balance(Partition::Exchange, coin_id)
            .await;
        if amount > available {
            return Err(SdkError::Validation(format!(
                "amount {} exceeds available exchange balance {}",
                amount, available
            )));
        }

        let body = WithdrawalSubmitBody {
            coin_id: coin_id.clone(),
            amount,
            address: address.to_string(),
        };
        let resp = self.client.http.submit_withdrawal(&body).await?;

        if !resp.is_success() {
            let message = resp
                .message
                .unwrap_or_else(|| "withdrawal rejected by ledger".to_string());
            tracing::warn!(%message, "Ledger rejected withdrawal; reconciling balances");
            let _ = self.client.wallets().refresh().await;
            return Err(SdkError::Ledger { message });
        }

        self.client.wallets().refresh().await?;
        let id = resp.withdrawal_id.unwrap_or_default();
        tracing::info!(coin = %coin_id, %amount, withdrawal_id = %id, "Withdrawal submitted");
        Ok(id)
    }
}
