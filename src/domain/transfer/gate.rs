//! Transfer gates — the volume gate and the pending-withdrawal guard.
//!
//! Both are pure decisions over data already fetched from the ledger, so
//! they can run (and be tested) without side effects. The orchestrator in
//! `client.rs` fetches the inputs and acts on the decision.

use super::{FeeMode, TransferDirection};
use crate::domain::withdrawal::WithdrawalTx;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fraction of the transferred amount kept by the user when bypassing an
/// unmet volume requirement: `net = amount × 0.80`, i.e. a 20% penalty.
/// Client-side UX value; the ledger enforces its own.
fn penalty_keep_rate() -> Decimal {
    Decimal::new(80, 2)
}

// ─── VolumeStatus ────────────────────────────────────────────────────────────

/// Trading-volume progress for one trading partition, as reported by the
/// ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeStatus {
    pub total_trading_volume: Decimal,
    pub required_volume: Decimal,
}

impl VolumeStatus {
    /// Volume still to be traded before the gate opens; never negative.
    pub fn remaining(&self) -> Decimal {
        (self.required_volume - self.total_trading_volume).max(Decimal::ZERO)
    }

    pub fn is_met(&self) -> bool {
        self.remaining().is_zero()
    }
}

// ─── Volume gate ─────────────────────────────────────────────────────────────

/// Decision of the volume gate for one transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// No fee; proceed.
    Pass,
    /// Proceed with the penalty deduction the user accepted.
    PassWithPenalty { net_amount: Decimal, fee: Decimal },
    /// Requirement unmet; the user must confirm the penalty (or cancel)
    /// before the transfer may proceed.
    Blocked { remaining: Decimal },
}

/// Run the volume gate.
///
/// Only trading→exchange is ever gated. Exchange→trading and spot↔futures
/// pass unconditionally, and a met requirement passes silently in either
/// fee mode.
pub fn assess_volume(
    direction: TransferDirection,
    status: &VolumeStatus,
    fee_mode: FeeMode,
    amount: Decimal,
) -> GateDecision {
    if direction != TransferDirection::TradingToExchange || status.is_met() {
        return GateDecision::Pass;
    }
    match fee_mode {
        FeeMode::None => GateDecision::Blocked {
            remaining: status.remaining(),
        },
        FeeMode::Penalty => {
            let (net_amount, fee) = penalty_split(amount);
            GateDecision::PassWithPenalty { net_amount, fee }
        }
    }
}

/// Split an amount into the credited net and the penalty fee.
///
/// `net = amount × 0.80`, `fee = amount − net`, so the two always sum back
/// to the original amount exactly.
pub fn penalty_split(amount: Decimal) -> (Decimal, Decimal) {
    let net = amount * penalty_keep_rate();
    (net, amount - net)
}

// ─── Pending-withdrawal guard ────────────────────────────────────────────────

/// Whether an outstanding withdrawal blocks exchange→trading transfers.
///
/// Any withdrawal still `pending` or `processing` blocks; settled, failed
/// and declined ones do not. Other directions never consult this guard.
pub fn withdrawal_blocks(direction: TransferDirection, withdrawals: &[WithdrawalTx]) -> bool {
    direction == TransferDirection::ExchangeToTrading
        && withdrawals.iter().any(|w| w.status.is_outstanding())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::withdrawal::{WithdrawalStatus, WithdrawalTx};
    use crate::shared::CoinId;
    use chrono::Utc;

    fn status(total: i64, required: i64) -> VolumeStatus {
        VolumeStatus {
            total_trading_volume: Decimal::new(total, 0),
            required_volume: Decimal::new(required, 0),
        }
    }

    fn withdrawal(status: WithdrawalStatus) -> WithdrawalTx {
        WithdrawalTx {
            id: "w1".to_string(),
            coin_id: CoinId::from("usdt"),
            amount: Decimal::new(50, 0),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_remaining_never_negative() {
        assert_eq!(status(700, 500).remaining(), Decimal::ZERO);
        assert!(status(700, 500).is_met());
        assert_eq!(status(200, 500).remaining(), Decimal::new(300, 0));
    }

    #[test]
    fn test_penalty_split_sums_back() {
        let amount = Decimal::new(100, 0);
        let (net, fee) = penalty_split(amount);
        assert_eq!(net, Decimal::new(80, 0));
        assert_eq!(fee, Decimal::new(20, 0));
        assert_eq!(net + fee, amount);

        // Odd amounts still sum back exactly.
        let amount = Decimal::new(3333, 2); // 33.33
        let (net, fee) = penalty_split(amount);
        assert_eq!(net + fee, amount);
    }

    #[test]
    fn test_gate_blocks_trading_to_exchange_when_unmet() {
        // Required 500, traded 200: blocked with 300 remaining.
        let decision = assess_volume(
            TransferDirection::TradingToExchange,
            &status(200, 500),
            FeeMode::None,
            Decimal::new(100, 0),
        );
        assert_eq!(
            decision,
            GateDecision::Blocked {
                remaining: Decimal::new(300, 0)
            }
        );
    }

    #[test]
    fn test_gate_penalty_forces_completion() {
        // Confirming the block re-runs with penalty: fee 20, net 80.
        let decision = assess_volume(
            TransferDirection::TradingToExchange,
            &status(200, 500),
            FeeMode::Penalty,
            Decimal::new(100, 0),
        );
        assert_eq!(
            decision,
            GateDecision::PassWithPenalty {
                net_amount: Decimal::new(80, 0),
                fee: Decimal::new(20, 0),
            }
        );
    }

    #[test]
    fn test_gate_passes_silently_when_met() {
        for fee_mode in [FeeMode::None, FeeMode::Penalty] {
            let decision = assess_volume(
                TransferDirection::TradingToExchange,
                &status(600, 500),
                fee_mode,
                Decimal::new(100, 0),
            );
            assert_eq!(decision, GateDecision::Pass);
        }
    }

    #[test]
    fn test_gate_never_applies_to_other_directions() {
        for direction in [
            TransferDirection::ExchangeToTrading,
            TransferDirection::CrossTrading,
        ] {
            let decision = assess_volume(
                direction,
                &status(0, 500),
                FeeMode::None,
                Decimal::new(100, 0),
            );
            assert_eq!(decision, GateDecision::Pass);
        }
    }

    #[test]
    fn test_withdrawal_guard_blocks_on_outstanding() {
        let txs = vec![
            withdrawal(WithdrawalStatus::Completed),
            withdrawal(WithdrawalStatus::Processing),
        ];
        assert!(withdrawal_blocks(TransferDirection::ExchangeToTrading, &txs));
    }

    #[test]
    fn test_withdrawal_guard_ignores_settled() {
        let txs = vec![
            withdrawal(WithdrawalStatus::Completed),
            withdrawal(WithdrawalStatus::Failed),
            withdrawal(WithdrawalStatus::Declined),
        ];
        assert!(!withdrawal_blocks(TransferDirection::ExchangeToTrading, &txs));
    }

    #[test]
    fn test_withdrawal_guard_only_exchange_to_trading() {
        let txs = vec![withdrawal(WithdrawalStatus::Pending)];
        assert!(!withdrawal_blocks(TransferDirection::TradingToExchange, &txs));
        assert!(!withdrawal_blocks(TransferDirection::CrossTrading, &txs));
    }
}
