//! Unified SDK error types.
//!
//! A blocked gate (volume unmet, pending withdrawal) is deliberately *not* an
//! error — it is the `TransferOutcome::Blocked` branch, a choice surfaced to
//! the user. Everything here is a real failure of the action.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Redemption error: {0}")]
    Redemption(#[from] RedemptionError),

    /// Business error reported by the remote ledger. The message is passed
    /// through verbatim; the ledger's verdict always wins over whatever the
    /// client believed locally.
    #[error("Ledger error: {message}")]
    Ledger { message: String },

    /// A request for the same action is already outstanding.
    #[error("A {0} request is already in flight")]
    InFlight(&'static str),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors (transport, timeout, remote status codes).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Redemption failures reported by the ledger.
///
/// The ledger's checks are authoritative; the client maps its error codes to
/// these variants and never re-derives the verdict locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedemptionError {
    #[error("Code not found")]
    NotFound,

    #[error("Code already redeemed by this user")]
    AlreadyRedeemed,

    #[error("Code has expired")]
    Expired,

    #[error("Cannot redeem your own code")]
    SelfRedemption,

    #[error("Order is not redeemable: {0}")]
    NotRedeemable(String),
}

impl RedemptionError {
    /// Map a ledger error code to a variant. Unknown codes fall through to
    /// `NotRedeemable` with the raw message so nothing is swallowed.
    pub fn from_ledger_code(code: &str, message: &str) -> Self {
        match code {
            "code_not_found" => Self::NotFound,
            "already_redeemed" => Self::AlreadyRedeemed,
            "code_expired" => Self::Expired,
            "own_code" => Self::SelfRedemption,
            _ => Self::NotRedeemable(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_code_mapping() {
        assert_eq!(
            RedemptionError::from_ledger_code("code_not_found", ""),
            RedemptionError::NotFound
        );
        assert_eq!(
            RedemptionError::from_ledger_code("already_redeemed", ""),
            RedemptionError::AlreadyRedeemed
        );
        assert_eq!(
            RedemptionError::from_ledger_code("code_expired", ""),
            RedemptionError::Expired
        );
        assert_eq!(
            RedemptionError::from_ledger_code("own_code", ""),
            RedemptionError::SelfRedemption
        );
    }

    #[test]
    fn test_unknown_ledger_code_keeps_message() {
        let err = RedemptionError::from_ledger_code("weird_code", "order locked");
        assert_eq!(
            err,
            RedemptionError::NotRedeemable("order locked".to_string())
        );
        assert!(format!("{err}").contains("order locked"));
    }
}
