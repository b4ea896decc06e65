//! Order state containers — app-owned, SDK-provided update logic.

use super::{Instrument, OrderStatus, TradeOrder};
use crate::shared::OrderCode;
use thiserror::Error;

/// Rejected lifecycle move. The stored order is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    #[error("no order with code {0}")]
    UnknownCode(String),

    #[error("invalid status transition {from} -> {to}")]
    Invalid { from: OrderStatus, to: OrderStatus },
}

/// The user's copy-trade orders, grouped by instrument.
///
/// The app owns instances of this type and calls SDK-provided update
/// methods. `apply_status` is the single point where lifecycle validity is
/// enforced, so illegal transitions cannot creep in per call site.
#[derive(Debug, Default)]
pub struct UserOrders {
    pub spot: Vec<TradeOrder>,
    pub futures: Vec<TradeOrder>,
}

impl UserOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, instrument: Instrument) -> &[TradeOrder] {
        match instrument {
            Instrument::Spot => &self.spot,
            Instrument::Futures => &self.futures,
        }
    }

    /// Replace one instrument's list from a REST fetch.
    pub fn replace(&mut self, instrument: Instrument, orders: Vec<TradeOrder>) {
        match instrument {
            Instrument::Spot => self.spot = orders,
            Instrument::Futures => self.futures = orders,
        }
    }

    /// Insert or update an order by code.
    pub fn upsert(&mut self, order: TradeOrder) {
        let list = match order.instrument() {
            Instrument::Spot => &mut self.spot,
            Instrument::Futures => &mut self.futures,
        };
        list.retain(|o| o.code != order.code);
        list.push(order);
    }

    /// Advance an order's status, rejecting anything the lifecycle table
    /// does not allow. A status only ever moves forward.
    pub fn apply_status(
        &mut self,
        code: &OrderCode,
        next: OrderStatus,
    ) -> Result<(), TransitionError> {
        let order = self
            .spot
            .iter_mut()
            .chain(self.futures.iter_mut())
            .find(|o| &o.code == code)
            .ok_or_else(|| TransitionError::UnknownCode(code.to_string()))?;

        if !order.status.can_transition_to(next) {
            return Err(TransitionError::Invalid {
                from: order.status,
                to: next,
            });
        }
        order.status = next;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.spot.clear();
        self.futures.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.spot.is_empty() && self.futures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Side, UserId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order(code: &str, status: OrderStatus) -> TradeOrder {
        TradeOrder {
            code: OrderCode::parse(code).unwrap(),
            symbol: "BTC/USDT".to_string(),
            side: Side::Long,
            entry_price: Decimal::new(60_000, 0),
            target_price: Decimal::new(63_000, 0),
            profit_percentage: Decimal::new(5, 0),
            quantity: Decimal::new(1, 1),
            notional_value: Decimal::new(6_000, 0),
            status,
            expires_at: Utc::now(),
            owner_user_id: UserId::from("owner"),
            follower_user_ids: vec![],
            futures: None,
        }
    }

    #[test]
    fn test_apply_status_advances_forward() {
        let mut orders = UserOrders::new();
        orders.upsert(order("AB12CD", OrderStatus::Pending));

        let code = OrderCode::parse("AB12CD").unwrap();
        orders.apply_status(&code, OrderStatus::PendingProfit).unwrap();
        assert_eq!(orders.spot[0].status, OrderStatus::PendingProfit);
        orders.apply_status(&code, OrderStatus::Completed).unwrap();
        assert_eq!(orders.spot[0].status, OrderStatus::Completed);
    }

    #[test]
    fn test_apply_status_rejects_backward() {
        let mut orders = UserOrders::new();
        orders.upsert(order("AB12CD", OrderStatus::PendingProfit));

        let code = OrderCode::parse("AB12CD").unwrap();
        let err = orders.apply_status(&code, OrderStatus::Pending).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Invalid {
                from: OrderStatus::PendingProfit,
                to: OrderStatus::Pending,
            }
        );
        // Untouched on rejection.
        assert_eq!(orders.spot[0].status, OrderStatus::PendingProfit);
    }

    #[test]
    fn test_apply_status_rejects_skip() {
        let mut orders = UserOrders::new();
        orders.upsert(order("AB12CD", OrderStatus::Pending));
        let code = OrderCode::parse("AB12CD").unwrap();
        assert!(orders.apply_status(&code, OrderStatus::Completed).is_err());
    }

    #[test]
    fn test_apply_status_unknown_code() {
        let mut orders = UserOrders::new();
        let code = OrderCode::parse("ZZ99ZZ").unwrap();
        let err = orders.apply_status(&code, OrderStatus::Expired).unwrap_err();
        assert!(matches!(err, TransitionError::UnknownCode(_)));
    }

    #[test]
    fn test_upsert_replaces_same_code() {
        let mut orders = UserOrders::new();
        orders.upsert(order("AB12CD", OrderStatus::Pending));
        orders.upsert(order("AB12CD", OrderStatus::PendingProfit));
        assert_eq!(orders.spot.len(), 1);
        assert_eq!(orders.spot[0].status, OrderStatus::PendingProfit);
    }
}
