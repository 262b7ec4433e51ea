//! Payment schedule outputs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which scheduled amount a payment attempt is for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Deposit,
    Balance,
    Full,
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentKind::Deposit => write!(f, "deposit"),
            PaymentKind::Balance => write!(f, "balance"),
            PaymentKind::Full => write!(f, "full"),
        }
    }
}

/// Deposit/balance split of an order total (amounts at 2 dp)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSchedule {
    pub deposit_amount: Decimal,
    pub deposit_percentage: Decimal,
    pub balance_amount: Decimal,
    pub balance_percentage: Decimal,
    pub total_amount: Decimal,
    pub deposit_due_date: DateTime<Utc>,
    pub balance_due_date: DateTime<Utc>,
}

impl PaymentSchedule {
    /// Amount expected for a payment of the given kind
    pub fn expected_amount(&self, kind: PaymentKind) -> Decimal {
        match kind {
            PaymentKind::Deposit => self.deposit_amount,
            PaymentKind::Balance => self.balance_amount,
            PaymentKind::Full => self.total_amount,
        }
    }
}
