//! High-level client — `VaultexClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cached state, and the per-action
//! in-flight flags.

use crate::domain::account::client::Account;
use crate::domain::account::Profile;
use crate::domain::order::client::Orders;
use crate::domain::order::UserOrders;
use crate::domain::transfer::client::Transfers;
use crate::domain::wallet::client::Wallets;
use crate::domain::wallet::WalletStore;
use crate::domain::withdrawal::client::Withdrawals;
use crate::error::SdkError;
use crate::http::VaultexHttp;

use async_lock::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::transfer::client::Transfers as TransfersClient;
pub use crate::domain::wallet::client::Wallets as WalletsClient;
pub use crate::domain::withdrawal::client::Withdrawals as WithdrawalsClient;

/// The primary entry point for the Vaultex SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.wallets()`, `client.transfers()`, `client.orders()`, etc.
pub struct VaultexClient {
    pub(crate) http: VaultexHttp,
    /// Partition balance snapshot, replaced atomically on refresh.
    pub(crate) wallet_store: Arc<RwLock<WalletStore>>,
    /// The user's copy-trade orders per instrument.
    pub(crate) user_orders: Arc<RwLock<UserOrders>>,
    /// Profile cache: (profile, fetched_at).
    pub(crate) profile_cache: Arc<RwLock<Option<(Profile, Instant)>>>,
    pub(crate) profile_cache_ttl: Duration,
    /// Per-action in-flight flags.
    pub(crate) flags: Arc<ActionFlags>,
}

impl VaultexClient {
    pub fn builder() -> VaultexClientBuilder {
        VaultexClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn wallets(&self) -> Wallets<'_> {
        Wallets { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn withdrawals(&self) -> Withdrawals<'_> {
        Withdrawals { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    /// Set or clear the bearer token used for native requests.
    pub async fn set_auth_token(&self, token: Option<String>) {
        self.http.set_auth_token(token).await;
    }

    /// Clear all cached state (balances, orders, profile).
    pub async fn clear_all_caches(&self) {
        self.wallet_store.write().await.reset();
        self.user_orders.write().await.clear();
        *self.profile_cache.write().await = None;
    }
}

impl Clone for VaultexClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            wallet_store: self.wallet_store.clone(),
            user_orders: self.user_orders.clone(),
            profile_cache: self.profile_cache.clone(),
            profile_cache_ttl: self.profile_cache_ttl,
            flags: self.flags.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// In-flight flags
// ═════════════════════════════════════════════════════════════════════════════

/// One boolean per user action, mirroring the disabled state of the
/// triggering control. A second submission of the same action while one is
/// outstanding fails with `SdkError::InFlight` instead of reaching the
/// network.
#[derive(Debug, Default)]
pub(crate) struct ActionFlags {
    transfer: AtomicBool,
    redeem: AtomicBool,
    withdrawal: AtomicBool,
}

impl ActionFlags {
    pub(crate) fn acquire_transfer(&self) -> Result<FlightGuard<'_>, SdkError> {
        Self::acquire(&self.transfer, "transfer")
    }

    pub(crate) fn acquire_redeem(&self) -> Result<FlightGuard<'_>, SdkError> {
        Self::acquire(&self.redeem, "redemption")
    }

    pub(crate) fn acquire_withdrawal(&self) -> Result<FlightGuard<'_>, SdkError> {
        Self::acquire(&self.withdrawal, "withdrawal")
    }

    fn acquire<'a>(flag: &'a AtomicBool, action: &'static str) -> Result<FlightGuard<'a>, SdkError> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SdkError::InFlight(action));
        }
        Ok(FlightGuard { flag })
    }
}

/// Releases the action flag when the request finishes, on every exit path.
#[derive(Debug)]
pub(crate) struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct VaultexClientBuilder {
    base_url: String,
    profile_cache_ttl: Duration,
    auth_token: Option<String>,
}

impl Default for VaultexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            profile_cache_ttl: Duration::from_secs(60),
            auth_token: None,
        }
    }
}

impl VaultexClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn profile_cache_ttl(mut self, ttl: Duration) -> Self {
        self.profile_cache_ttl = ttl;
        self
    }

    /// Pre-set a bearer token on construction.
    pub fn auth_token(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<VaultexClient, SdkError> {
        let http = VaultexHttp::new(&self.base_url);
        if let Some(token) = self.auth_token {
            // Construction time; the token slot is uncontended.
            http.preset_auth_token(token);
        }
        Ok(VaultexClient {
            http,
            wallet_store: Arc::new(RwLock::new(WalletStore::new())),
            user_orders: Arc::new(RwLock::new(UserOrders::new())),
            profile_cache: Arc::new(RwLock::new(None)),
            profile_cache_ttl: self.profile_cache_ttl,
            flags: Arc::new(ActionFlags::default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_blocks_second_acquire() {
        let flags = ActionFlags::default();
        let guard = flags.acquire_transfer().unwrap();
        let err = flags.acquire_transfer().unwrap_err();
        assert!(matches!(err, SdkError::InFlight("transfer")));
        drop(guard);
        assert!(flags.acquire_transfer().is_ok());
    }

    #[test]
    fn test_flags_are_per_action() {
        let flags = ActionFlags::default();
        let _transfer = flags.acquire_transfer().unwrap();
        // A transfer in flight does not block a redemption.
        assert!(flags.acquire_redeem().is_ok());
        assert!(flags.acquire_withdrawal().is_ok());
    }

    #[test]
    fn test_guard_releases_on_error_path() {
        let flags = ActionFlags::default();
        {
            let _guard = flags.acquire_redeem().unwrap();
            // Guard dropped at scope end as it would be on an early return.
        }
        assert!(flags.acquire_redeem().is_ok());
    }
}
