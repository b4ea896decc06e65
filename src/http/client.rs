//! Low-level HTTP client — `VaultexHttp`.
//!
//! One method per ledger endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level `VaultexClient` wraps this.

use crate::domain::account::wire::{CoinInfoResponse, ProfileResponse};
use crate::domain::order::wire::{OrderResponse, OrdersResponse, RedeemBody, RedeemResponse};
use crate::domain::order::Instrument;
use crate::domain::transfer::wire::{TransferBody, TransferResponse, VolumeStatusResponse};
use crate::domain::wallet::wire::BalancesResponse;
use crate::domain::withdrawal::wire::{
    WithdrawalSubmitBody, WithdrawalSubmitResponse, WithdrawalsResponse,
};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{OrderCode, Partition};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Vaultex REST API.
pub struct VaultexHttp {
    base_url: String,
    client: Client,
    /// Auth token for native clients. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl VaultexHttp {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(None)),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the auth token (native only — on WASM, cookies handle auth).
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    /// Construction-time token injection, before the client is shared.
    pub(crate) fn preset_auth_token(&self, token: String) {
        if let Some(mut slot) = self.auth_token.try_write() {
            *slot = Some(token);
        }
    }

    // ── Wallets ──────────────────────────────────────────────────────────

    /// All three partitions in a single payload, so the caller can swap its
    /// snapshot atomically.
    pub async fn get_balances(&self) -> Result<BalancesResponse, HttpError> {
        let url = format!("{}/api/wallets/balances", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Transfers ────────────────────────────────────────────────────────

    pub async fn get_volume_status(
        &self,
        partition: Partition,
    ) -> Result<VolumeStatusResponse, HttpError> {
        let url = format!(
            "{}/api/users/volume-status?partition={}",
            self.base_url,
            partition.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn transfer_exchange_spot(
        &self,
        body: &TransferBody,
    ) -> Result<TransferResponse, HttpError> {
        let url = format!("{}/api/transfers/exchange-spot", self.base_url);
        self.post(&url, body, RetryPolicy::None).await
    }

    pub async fn transfer_exchange_futures(
        &self,
        body: &TransferBody,
    ) -> Result<TransferResponse, HttpError> {
        let url = format!("{}/api/transfers/exchange-futures", self.base_url);
        self.post(&url, body, RetryPolicy::None).await
    }

    pub async fn transfer_spot_futures(
        &self,
        body: &TransferBody,
    ) -> Result<TransferResponse, HttpError> {
        let url = format!("{}/api/transfers/spot-futures", self.base_url);
        self.post(&url, body, RetryPolicy::None).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_order_by_code(&self, code: &OrderCode) -> Result<OrderResponse, HttpError> {
        let url = format!("{}/api/orders/code/{}", self.base_url, code);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn redeem_order(&self, body: &RedeemBody) -> Result<RedeemResponse, HttpError> {
        let url = format!("{}/api/orders/redeem", self.base_url);
        self.post(&url, body, RetryPolicy::None).await
    }

    pub async fn get_user_orders(
        &self,
        instrument: Instrument,
    ) -> Result<OrdersResponse, HttpError> {
        let url = format!(
            "{}/api/users/orders?instrument={}",
            self.base_url,
            instrument.as_str()
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Withdrawals ──────────────────────────────────────────────────────

    pub async fn get_withdrawals(&self) -> Result<WithdrawalsResponse, HttpError> {
        let url = format!("{}/api/withdrawals", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn submit_withdrawal(
        &self,
        body: &WithdrawalSubmitBody,
    ) -> Result<WithdrawalSubmitResponse, HttpError> {
        let url = format!("{}/api/withdrawals", self.base_url);
        self.post(&url, body, RetryPolicy::None).await
    }

    // ── Account ──────────────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<ProfileResponse, HttpError> {
        let url = format!("{}/api/users/profile", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_coin_info(&self, coin_name: &str) -> Result<CoinInfoResponse, HttpError> {
        let url = format!(
            "{}/api/coins/info?name={}",
            self.base_url,
            urlencoding::encode(coin_name)
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        // Inject auth token on native
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(token) = self.auth_token.read().await.as_ref() {
                req = req.header("Authorization", format!("Bearer {}", token));
            }
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for VaultexHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
