//! # Vaultex SDK
//!
//! A unified Rust SDK for the Vaultex custodial trading platform,
//! supporting both native and WASM targets.
//!
//! The remote ledger is the system of record for balances and orders; this
//! crate is the client-side orchestration layer: inter-partition transfers
//! under volume gating and penalty-fee rules, copy-trade code redemption
//! through the order status lifecycle, withdrawals, and the cached wallet
//! snapshot a UI renders from.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, gates and state containers
//!    (always available, WASM-safe)
//! 2. **HTTP API** — `VaultexHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `VaultexClient` with nested sub-clients,
//!    cached state, and per-action in-flight flags
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vaultex_sdk::prelude::*;
//!
//! let client = VaultexClient::builder()
//!     .base_url("https://api.vaultex.io")
//!     .build()?;
//!
//! let snapshot = client.wallets().refresh().await?;
//! let outcome = client.transfers().execute(&request).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `VaultexClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, OrderCode, Partition, Side, UserId};

    // Domain types — wallet
    pub use crate::domain::wallet::{Balance, WalletSnapshot, WalletStore};

    // Domain types — transfer
    pub use crate::domain::transfer::{
        FeeMode, GateDecision, PartitionPair, TransferBlock, TransferDirection, TransferOutcome,
        TransferRequest, VolumeStatus,
    };

    // Domain types — order
    pub use crate::domain::order::{
        FuturesFigures, Instrument, OrderStatus, RedemptionPreview, TradeOrder, UserOrders,
    };

    // Domain types — withdrawal, account
    pub use crate::domain::account::{CoinInfo, Profile};
    pub use crate::domain::withdrawal::{WithdrawalStatus, WithdrawalTx};

    // Errors
    pub use crate::error::{RedemptionError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountClient, OrdersClient, TransfersClient, VaultexClient, VaultexClientBuilder,
        WalletsClient, WithdrawalsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
