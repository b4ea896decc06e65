//! Conversion: OrderResponse → TradeOrder (TryFrom + validation).

use super::wire::OrderResponse;
use super::{FuturesFigures, OrderStatus, TradeOrder};
use crate::shared::OrderCode;
use thiserror::Error;

/// An order payload the client refuses to trust.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderConvertError {
    #[error("malformed order code {0:?}")]
    InvalidCode(String),

    #[error("unknown order status {0:?}")]
    InvalidStatus(String),

    #[error("futures leverage must be >= 1, got {0}")]
    LeverageTooLow(u32),

    #[error("futures order {0} is missing margin or liquidation price")]
    MissingFuturesFigures(String),
}

impl TryFrom<OrderResponse> for TradeOrder {
    type Error = OrderConvertError;

    fn try_from(resp: OrderResponse) -> Result<Self, Self::Error> {
        let code = OrderCode::parse(&resp.code)
            .map_err(|_| OrderConvertError::InvalidCode(resp.code.clone()))?;
        let status = OrderStatus::parse(&resp.status)
            .ok_or_else(|| OrderConvertError::InvalidStatus(resp.status.clone()))?;

        // Leverage marks the order as futures; the ledger must then also
        // send the figures it computed from it.
        let futures = match resp.leverage {
            None => None,
            Some(leverage) => {
                if leverage < 1 {
                    return Err(OrderConvertError::LeverageTooLow(leverage));
                }
                match (resp.margin, resp.liquidation_price) {
                    (Some(margin), Some(liquidation_price)) => Some(FuturesFigures {
                        leverage,
                        margin,
                        liquidation_price,
                    }),
                    _ => {
                        return Err(OrderConvertError::MissingFuturesFigures(
                            code.to_string(),
                        ))
                    }
                }
            }
        };

        Ok(TradeOrder {
            code,
            symbol: resp.symbol,
            side: resp.side,
            entry_price: resp.entry_price,
            target_price: resp.target_price,
            profit_percentage: resp.profit_percentage,
            quantity: resp.quantity,
            notional_value: resp.notional_value,
            status,
            expires_at: resp.expires_at,
            owner_user_id: resp.owner_user_id,
            follower_user_ids: resp.follower_user_ids,
            futures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Instrument;
    use crate::shared::{Side, UserId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn spot_response() -> OrderResponse {
        OrderResponse {
            code: "AB12CD".to_string(),
            symbol: "BTC/USDT".to_string(),
            side: Side::Long,
            entry_price: Decimal::new(60_000, 0),
            target_price: Decimal::new(63_000, 0),
            profit_percentage: Decimal::new(5, 0),
            quantity: Decimal::new(1, 1),
            notional_value: Decimal::new(6_000, 0),
            status: "pending".to_string(),
            expires_at: Utc::now(),
            owner_user_id: UserId::from("owner"),
            follower_user_ids: vec![],
            leverage: None,
            margin: None,
            liquidation_price: None,
        }
    }

    #[test]
    fn test_spot_order_converts() {
        let order = TradeOrder::try_from(spot_response()).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.instrument(), Instrument::Spot);
        assert!(order.futures.is_none());
    }

    #[test]
    fn test_futures_order_carries_ledger_figures() {
        let mut resp = spot_response();
        resp.leverage = Some(10);
        resp.margin = Some(Decimal::new(600, 0));
        resp.liquidation_price = Some(Decimal::new(48_000, 0));
        let order = TradeOrder::try_from(resp).unwrap();
        assert_eq!(order.instrument(), Instrument::Futures);
        let figures = order.futures.unwrap();
        assert_eq!(figures.leverage, 10);
        assert_eq!(figures.margin, Decimal::new(600, 0));
    }

    #[test]
    fn test_futures_without_figures_rejected() {
        let mut resp = spot_response();
        resp.leverage = Some(10);
        let err = TradeOrder::try_from(resp).unwrap_err();
        assert!(matches!(err, OrderConvertError::MissingFuturesFigures(_)));
    }

    #[test]
    fn test_zero_leverage_rejected() {
        let mut resp = spot_response();
        resp.leverage = Some(0);
        resp.margin = Some(Decimal::ONE);
        resp.liquidation_price = Some(Decimal::ONE);
        let err = TradeOrder::try_from(resp).unwrap_err();
        assert_eq!(err, OrderConvertError::LeverageTooLow(0));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut resp = spot_response();
        resp.status = "approved".to_string();
        let err = TradeOrder::try_from(resp).unwrap_err();
        assert_eq!(err, OrderConvertError::InvalidStatus("approved".to_string()));
    }

    #[test]
    fn test_malformed_code_rejected() {
        let mut resp = spot_response();
        resp.code = "AB12".to_string();
        let err = TradeOrder::try_from(resp).unwrap_err();
        assert!(matches!(err, OrderConvertError::InvalidCode(_)));
    }
}
