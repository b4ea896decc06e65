//! Network URL constants for the Vaultex SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.vaultex.io";
