//! HTTP client layer — `VaultexHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::VaultexHttp;
pub use retry::{RetryConfig, RetryPolicy};
