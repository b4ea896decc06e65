//! Conversion: BalancesResponse → WalletSnapshot (TryFrom + validation).

use super::wire::{BalanceEntry, BalancesResponse};
use super::{Balance, WalletSnapshot};
use crate::shared::Partition;
use rust_decimal::Decimal;
use thiserror::Error;

/// A balance row that violates the ledger's own invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceValidationError {
    #[error("{partition}/{coin}: balance {balance} is negative")]
    NegativeBalance {
        partition: Partition,
        coin: String,
        balance: Decimal,
    },

    #[error("{partition}/{coin}: locked {locked} outside [0, {balance}]")]
    LockedOutOfRange {
        partition: Partition,
        coin: String,
        locked: Decimal,
        balance: Decimal,
    },
}

fn validate_entry(
    entry: BalanceEntry,
    partition: Partition,
) -> Result<Balance, BalanceValidationError> {
    if entry.balance < Decimal::ZERO {
        return Err(BalanceValidationError::NegativeBalance {
            partition,
            coin: entry.coin_id.to_string(),
            balance: entry.balance,
        });
    }
    if entry.locked_balance < Decimal::ZERO || entry.locked_balance > entry.balance {
        return Err(BalanceValidationError::LockedOutOfRange {
            partition,
            coin: entry.coin_id.to_string(),
            locked: entry.locked_balance,
            balance: entry.balance,
        });
    }
    Ok(Balance {
        user_id: entry.user_id,
        coin_id: entry.coin_id,
        coin_name: entry.coin_name,
        partition,
        balance: entry.balance,
        locked_balance: entry.locked_balance,
    })
}

impl TryFrom<BalancesResponse> for WalletSnapshot {
    type Error = BalanceValidationError;

    /// The whole snapshot is rejected if any row is invalid — a partial
    /// snapshot would break atomic replacement.
    fn try_from(resp: BalancesResponse) -> Result<Self, Self::Error> {
        let convert = |entries: Vec<BalanceEntry>, partition: Partition| {
            entries
                .into_iter()
                .map(|e| validate_entry(e, partition))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(WalletSnapshot {
            exchange: convert(resp.exchange, Partition::Exchange)?,
            spot: convert(resp.spot, Partition::Spot)?,
            futures: convert(resp.futures, Partition::Futures)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{CoinId, UserId};

    fn entry(coin: &str, balance: i64, locked: i64) -> BalanceEntry {
        BalanceEntry {
            user_id: UserId::from("u1"),
            coin_id: CoinId::from(coin),
            coin_name: coin.to_uppercase(),
            balance: Decimal::new(balance, 0),
            locked_balance: Decimal::new(locked, 0),
        }
    }

    fn response(spot: Vec<BalanceEntry>) -> BalancesResponse {
        BalancesResponse {
            exchange: vec![entry("usdt", 500, 0)],
            spot,
            futures: vec![],
        }
    }

    #[test]
    fn test_valid_snapshot_converts() {
        let snap = WalletSnapshot::try_from(response(vec![entry("usdt", 100, 30)])).unwrap();
        assert_eq!(snap.spot.len(), 1);
        assert_eq!(snap.spot[0].partition, Partition::Spot);
        assert_eq!(snap.spot[0].available(), Decimal::new(70, 0));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let err = WalletSnapshot::try_from(response(vec![entry("usdt", -1, 0)])).unwrap_err();
        assert!(matches!(err, BalanceValidationError::NegativeBalance { .. }));
    }

    #[test]
    fn test_locked_above_balance_rejected() {
        let err = WalletSnapshot::try_from(response(vec![entry("usdt", 100, 101)])).unwrap_err();
        assert!(matches!(err, BalanceValidationError::LockedOutOfRange { .. }));
    }

    #[test]
    fn test_negative_locked_rejected() {
        let err = WalletSnapshot::try_from(response(vec![entry("usdt", 100, -5)])).unwrap_err();
        assert!(matches!(err, BalanceValidationError::LockedOutOfRange { .. }));
    }
}
