//! Order domain — copy-trade orders, redemption, status lifecycle.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod preview;
pub mod state;
pub mod wire;

use crate::shared::{OrderCode, Side, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use preview::{redemption_preview, RedemptionPreview};
pub use state::UserOrders;

// ─── Instrument ──────────────────────────────────────────────────────────────

/// Which market a copy-trade order runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Spot,
    Futures,
}

impl Instrument {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Futures => "futures",
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Lifecycle status of a copy-trade order.
///
/// Valid transitions, encoded in [`OrderStatus::can_transition_to`]:
/// `pending → pending_profit | cancelled | expired` and
/// `pending_profit → completed | partial_cancelled`. A status never moves
/// backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    PendingProfit,
    Completed,
    Cancelled,
    Expired,
    PartialCancelled,
}

impl OrderStatus {
    /// Single point of truth for lifecycle validity.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, PendingProfit)
                | (Pending, Cancelled)
                | (Pending, Expired)
                | (PendingProfit, Completed)
                | (PendingProfit, PartialCancelled)
        )
    }

    /// No further transitions leave these states through this client.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Expired)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "pending_profit" => Some(Self::PendingProfit),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            "expired" => Some(Self::Expired),
            "partial_cancelled" => Some(Self::PartialCancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PendingProfit => "pending_profit",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
            Self::PartialCancelled => "partial_cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── TradeOrder ──────────────────────────────────────────────────────────────

/// Ledger-computed figures attached to futures orders.
///
/// `margin` and `liquidation_price` arrive from the ledger and are the
/// authoritative values; the client renders them as-is. Client-side math
/// lives only in [`preview`] and is cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesFigures {
    pub leverage: u32,
    pub margin: Decimal,
    pub liquidation_price: Decimal,
}

/// A validated, domain-level copy-trade order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOrder {
    pub code: OrderCode,
    pub symbol: String,
    pub side: Side,
    pub entry_price: Decimal,
    pub target_price: Decimal,
    pub profit_percentage: Decimal,
    pub quantity: Decimal,
    pub notional_value: Decimal,
    pub status: OrderStatus,
    pub expires_at: DateTime<Utc>,
    pub owner_user_id: UserId,
    pub follower_user_ids: Vec<UserId>,
    /// Present iff this is a futures order.
    pub futures: Option<FuturesFigures>,
}

impl TradeOrder {
    pub fn instrument(&self) -> Instrument {
        if self.futures.is_some() {
            Instrument::Futures
        } else {
            Instrument::Spot
        }
    }

    /// Display-side expiry check. The ledger's verdict at redemption time
    /// is authoritative.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    const ALL: [OrderStatus; 6] = [
        Pending,
        PendingProfit,
        Completed,
        Cancelled,
        Expired,
        PartialCancelled,
    ];

    #[test]
    fn test_pending_transitions() {
        assert!(Pending.can_transition_to(PendingProfit));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Pending.can_transition_to(Expired));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(PartialCancelled));
    }

    #[test]
    fn test_pending_profit_transitions() {
        assert!(PendingProfit.can_transition_to(Completed));
        assert!(PendingProfit.can_transition_to(PartialCancelled));
        assert!(!PendingProfit.can_transition_to(Pending));
        assert!(!PendingProfit.can_transition_to(Expired));
    }

    #[test]
    fn test_terminal_states_never_advance() {
        for from in [Completed, Cancelled, Expired] {
            assert!(from.is_terminal());
            for to in ALL {
                assert!(!from.can_transition_to(to), "{from} -> {to} must be invalid");
            }
        }
    }

    #[test]
    fn test_no_backward_transitions() {
        for to in ALL {
            assert!(!PendingProfit.can_transition_to(Pending));
            assert!(!Completed.can_transition_to(to));
        }
    }

    #[test]
    fn test_status_serde_snake_case() {
        let s: OrderStatus = serde_json::from_str("\"pending_profit\"").unwrap();
        assert_eq!(s, PendingProfit);
        assert_eq!(
            serde_json::to_string(&PartialCancelled).unwrap(),
            "\"partial_cancelled\""
        );
    }
}
