//! Cosmetic redemption preview.
//!
//! Everything in this module is client-side display math for the confirm
//! dialog, recomputed from the order's public parameters. It is never
//! persisted, never submitted, and never a substitute for the figures the
//! ledger returns on the order itself (`TradeOrder::futures` and the
//! settlement fields). The distinct type keeps preview values from being
//! mistaken for authoritative ones.

use super::TradeOrder;
use crate::shared::Side;
use rust_decimal::Decimal;

/// Preview figures for the redemption confirm dialog, by instrument.
#[derive(Debug, Clone, PartialEq)]
pub enum RedemptionPreview {
    Spot {
        target_price: Decimal,
        projected_profit: Decimal,
    },
    Futures {
        target_price: Decimal,
        projected_profit: Decimal,
        margin: Decimal,
        liquidation_price: Decimal,
    },
}

/// Build the preview for an order. One function for both instruments so
/// the spot and futures dialogs cannot drift apart.
pub fn redemption_preview(order: &TradeOrder) -> RedemptionPreview {
    let projected_profit =
        order.notional_value * order.profit_percentage / Decimal::ONE_HUNDRED;

    match &order.futures {
        None => RedemptionPreview::Spot {
            target_price: order.target_price,
            projected_profit,
        },
        Some(figures) => {
            let leverage = Decimal::from(figures.leverage);
            let margin = order.notional_value / leverage;
            let liquidation_price = match order.side {
                Side::Long => order.entry_price * Decimal::new(8, 1),
                Side::Short => order.entry_price * Decimal::new(12, 1),
            };
            RedemptionPreview::Futures {
                target_price: order.target_price,
                projected_profit,
                margin,
                liquidation_price,
            }
        }
    }
}
