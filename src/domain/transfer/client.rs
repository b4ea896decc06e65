//! Transfers sub-client — validation, gating, dispatch, reconciliation.

use crate::client::VaultexClient;
use crate::domain::transfer::gate::{assess_volume, withdrawal_blocks, GateDecision, VolumeStatus};
use crate::domain::transfer::wire::TransferBody;
use crate::domain::transfer::{
    FeeMode, PartitionPair, TransferBlock, TransferDirection, TransferOutcome, TransferRequest,
};
use crate::domain::withdrawal::WithdrawalTx;
use crate::error::SdkError;
use rust_decimal::Decimal;

pub struct Transfers<'a> {
    pub(crate) client: &'a VaultexClient,
}

impl<'a> Transfers<'a> {
    /// Validate, gate, and execute a transfer.
    ///
    /// Checks run in order and fail fast, each without side effects: amount
    /// shape, available balance, then the direction's gate. A blocked gate
    /// returns `TransferOutcome::Blocked` before the transfer endpoint is
    /// ever contacted; the caller may re-invoke with `FeeMode::Penalty`
    /// after the user confirms the deduction. Exactly one network call to
    /// the transfer endpoint is made per successful transfer, and it is
    /// never retried automatically.
    pub async fn execute(&self, request: &TransferRequest) -> Result<TransferOutcome, SdkError> {
        let _flight = self.client.flags.acquire_transfer()?;

        let Some(pair) = request.pair() else {
            return Err(SdkError::Validation(
                "source and destination partitions must differ".to_string(),
            ));
        };
        if request.amount <= Decimal::ZERO {
            return Err(SdkError::Validation(format!(
                "transfer amount must be positive, got {}",
                request.amount
            )));
        }

        let direction = request.direction();
        if request.fee_mode == FeeMode::Penalty
            && direction != TransferDirection::TradingToExchange
        {
            return Err(SdkError::Validation(
                "penalty fee mode only applies to trading-to-exchange transfers".to_string(),
            ));
        }

        let available = self
            .client
            .wallets()
            .available_balance(request.source, &request.coin_id)
            .await;
        if request.amount > available {
            return Err(SdkError::Validation(format!(
                "amount {} exceeds available balance {} in {}",
                request.amount, available, request.source
            )));
        }

        match direction {
            TransferDirection::ExchangeToTrading => {
                let resp = self.client.http.get_withdrawals().await?;
                let withdrawals: Vec<WithdrawalTx> =
                    resp.withdrawals.into_iter().map(Into::into).collect();
                if withdrawal_blocks(direction, &withdrawals) {
                    return Ok(TransferOutcome::Blocked(TransferBlock::PendingWithdrawal));
                }
            }
            TransferDirection::TradingToExchange => {
                let resp = self.client.http.get_volume_status(request.source).await?;
                let status = VolumeStatus {
                    total_trading_volume: resp.total_trading_volume,
                    required_volume: resp.required_volume,
                };
                if let GateDecision::Blocked { remaining } =
                    assess_volume(direction, &status, request.fee_mode, request.amount)
                {
                    return Ok(TransferOutcome::Blocked(TransferBlock::VolumeUnmet {
                        remaining,
                    }));
                }
            }
            TransferDirection::CrossTrading => {}
        }

        let body = TransferBody {
            coin_id: request.coin_id.clone(),
            coin_name: request.coin_name.clone(),
            amount: request.amount,
            source: request.source,
            dest: request.dest,
            fee_mode: request.fee_mode,
        };
        let resp = match pair {
            PartitionPair::ExchangeSpot => self.client.http.transfer_exchange_spot(&body).await?,
            PartitionPair::ExchangeFutures => {
                self.client.http.transfer_exchange_futures(&body).await?
            }
            PartitionPair::SpotFutures => self.client.http.transfer_spot_futures(&body).await?,
        };

        if !resp.is_success() {
            let message = resp
                .message
                .unwrap_or_else(|| "transfer rejected by ledger".to_string());
            tracing::warn!(%message, "Ledger rejected transfer; reconciling balances");
            let _ = self.client.wallets().refresh().await;
            return Err(SdkError::Ledger { message });
        }

        let fee = resp.fee.unwrap_or(Decimal::ZERO);
        let net_amount = resp.net_amount.unwrap_or(request.amount - fee);
        if net_amount + fee != request.amount {
            let _ = self.client.wallets().refresh().await;
            return Err(SdkError::Ledger {
                message: format!(
                    "transfer split mismatch: net {} + fee {} != amount {}",
                    net_amount, fee, request.amount
                ),
            });
        }

        self.client.wallets().refresh().await?;
        tracing::info!(
            coin = %request.coin_id,
            amount = %request.amount,
            %fee,
            source = %request.source,
            dest = %request.dest,
            "Transfer completed"
        );
        Ok(TransferOutcome::Completed { net_amount, fee })
    }
}
