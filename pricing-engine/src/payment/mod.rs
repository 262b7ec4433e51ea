//! Payment Schedule Calculator
//!
//! Splits an order total into a deposit and a balance with calendar-day due
//! dates, and checks payment attempts against the schedule to the cent.

use crate::core::PaymentTerms;
use crate::money::{percent_of, round2, to_decimal};
use crate::utils::error::{EngineError, ErrorCode};
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use shared::quote::{PaymentKind, PaymentSchedule};

/// Longest due period accepted for either payment (days)
pub const MAX_DUE_DAYS: i64 = 3650;

impl PaymentTerms {
    /// Deposit percentage must lie in [0, 100] and due days in [0, 3650]
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.deposit_percentage < Decimal::ZERO
            || self.deposit_percentage > Decimal::ONE_HUNDRED
        {
            return Err(EngineError::InvalidTerms(format!(
                "deposit percentage must be between 0 and 100, got {}",
                self.deposit_percentage
            )));
        }
        let due_days = [self.deposit_due_days, self.balance_due_days];
        if !due_days.iter().all(|days| (0..=MAX_DUE_DAYS).contains(days)) {
            return Err(EngineError::InvalidTerms(format!(
                "due days must be between 0 and {}, got {} / {}",
                MAX_DUE_DAYS, self.deposit_due_days, self.balance_due_days
            )));
        }
        Ok(())
    }
}

/// Build the deposit/balance schedule for an order total
///
/// `deposit = round2(total × pct / 100)`, `balance = total − deposit`; the
/// two always add up to the (cent-rounded) total.
pub fn calculate_schedule(
    total: Decimal,
    terms: &PaymentTerms,
    issued_at: DateTime<Utc>,
) -> Result<PaymentSchedule, EngineError> {
    terms.validate()?;
    if total.is_sign_negative() && !total.is_zero() {
        return Err(EngineError::validation(
            ErrorCode::InvalidPaymentAmount,
            "total_amount",
            format!("must not be negative, got {}", total),
        ));
    }

    let total_amount = round2(total);
    let deposit = percent_of(total_amount, terms.deposit_percentage).ok_or_else(|| {
        EngineError::validation(
            ErrorCode::InvalidPaymentAmount,
            "total_amount",
            format!("{} is too large to schedule", total),
        )
    })?;
    let deposit_amount = round2(deposit);
    let balance_amount = round2(total_amount - deposit_amount);

    Ok(PaymentSchedule {
        deposit_amount,
        deposit_percentage: terms.deposit_percentage,
        balance_amount,
        balance_percentage: Decimal::ONE_HUNDRED - terms.deposit_percentage,
        total_amount,
        deposit_due_date: due_date(issued_at, terms.deposit_due_days)?,
        balance_due_date: due_date(issued_at, terms.balance_due_days)?,
    })
}

fn due_date(issued_at: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, EngineError> {
    TimeDelta::try_days(days)
        .and_then(|delta| issued_at.checked_add_signed(delta))
        .ok_or_else(|| {
            let reason = format!("due date {} days after {} is out of range", days, issued_at);
            EngineError::InvalidTerms(reason)
        })
}

/// Check an attempted payment against the scheduled amount
///
/// Comparison is exact at two decimal places; a mismatch is rejected, never
/// adjusted.
pub fn validate_payment_amount(
    schedule: &PaymentSchedule,
    kind: PaymentKind,
    amount: f64,
) -> Result<(), EngineError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(EngineError::validation(
            ErrorCode::InvalidPaymentAmount,
            "amount",
            format!("must be a positive finite number, got {}", amount),
        ));
    }

    let expected = round2(schedule.expected_amount(kind));
    let actual = round2(to_decimal(amount));
    if actual != expected {
        tracing::warn!(
            kind = %kind,
            expected = %expected,
            actual = %actual,
            "Payment amount does not match schedule"
        );
        return Err(EngineError::ScheduleMismatch {
            kind,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap()
    }

    fn terms(pct: i64) -> PaymentTerms {
        PaymentTerms {
            deposit_percentage: Decimal::from(pct),
            ..PaymentTerms::default()
        }
    }

    #[test]
    fn test_default_split() {
        let schedule = calculate_schedule(Decimal::from(3470), &terms(20), issued_at()).unwrap();
        assert_eq!(schedule.deposit_amount, Decimal::from(694));
        assert_eq!(schedule.balance_amount, Decimal::from(2776));
        assert_eq!(schedule.deposit_percentage, Decimal::from(20));
        assert_eq!(schedule.balance_percentage, Decimal::from(80));
        assert_eq!(schedule.total_amount, Decimal::from(3470));
    }

    #[test]
    fn test_due_dates_are_calendar_days() {
        let schedule = calculate_schedule(Decimal::from(100), &terms(20), issued_at()).unwrap();
        assert_eq!(
            schedule.deposit_due_date,
            Utc.with_ymd_and_hms(2026, 3, 17, 9, 30, 0).unwrap()
        );
        assert_eq!(
            schedule.balance_due_date,
            Utc.with_ymd_and_hms(2026, 4, 9, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_deposit_plus_balance_is_total() {
        let totals = [
            Decimal::new(1, 2),
            Decimal::new(99999, 2),
            Decimal::new(190188901, 5),
            Decimal::new(333333, 2),
            Decimal::from(1_000_000),
        ];
        for total in totals {
            for pct in [0, 1, 13, 20, 33, 50, 99, 100] {
                let schedule = calculate_schedule(total, &terms(pct), issued_at()).unwrap();
                assert_eq!(
                    schedule.deposit_amount + schedule.balance_amount,
                    schedule.total_amount,
                    "total {total} pct {pct}"
                );
                assert_eq!(
                    schedule.deposit_percentage + schedule.balance_percentage,
                    Decimal::ONE_HUNDRED
                );
            }
        }
    }

    #[test]
    fn test_unrounded_total_is_rounded_to_cents() {
        // 1901.88901 → 1901.89; 20% → 380.378 → 380.38
        let schedule =
            calculate_schedule(Decimal::new(190188901, 5), &terms(20), issued_at()).unwrap();
        assert_eq!(schedule.total_amount, Decimal::new(190189, 2));
        assert_eq!(schedule.deposit_amount, Decimal::new(38038, 2));
        assert_eq!(schedule.balance_amount, Decimal::new(152151, 2));
    }

    #[test]
    fn test_invalid_terms() {
        for pct in [-1, 101] {
            let err = calculate_schedule(Decimal::from(100), &terms(pct), issued_at()).unwrap_err();
            assert!(matches!(err, EngineError::InvalidTerms(_)));
            assert_eq!(err.code(), ErrorCode::InvalidDepositPercentage);
        }
    }

    #[test]
    fn test_due_days_bounded() {
        let far = PaymentTerms {
            deposit_due_days: i64::MAX / 2,
            ..PaymentTerms::default()
        };
        let err = calculate_schedule(Decimal::from(100), &far, issued_at()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTerms(_)));

        let ten_years = PaymentTerms {
            balance_due_days: MAX_DUE_DAYS,
            ..PaymentTerms::default()
        };
        let schedule = calculate_schedule(Decimal::from(100), &ten_years, issued_at()).unwrap();
        assert_eq!(
            schedule.balance_due_date,
            issued_at() + TimeDelta::days(MAX_DUE_DAYS)
        );

        let negative = PaymentTerms {
            balance_due_days: -1,
            ..PaymentTerms::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_due_date_past_calendar_end() {
        let end = DateTime::<Utc>::MAX_UTC;
        assert!(matches!(due_date(end, 1), Err(EngineError::InvalidTerms(_))));
        assert_eq!(due_date(end, 0).unwrap(), end);
    }

    #[test]
    fn test_total_too_large_to_schedule() {
        let err = calculate_schedule(Decimal::MAX, &terms(20), issued_at()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPaymentAmount);
    }

    #[test]
    fn test_negative_total_rejected() {
        let err = calculate_schedule(Decimal::from(-5), &terms(20), issued_at()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPaymentAmount);
    }

    #[test]
    fn test_validate_payment_amount_exact() {
        let schedule = calculate_schedule(Decimal::from(3470), &terms(20), issued_at()).unwrap();
        assert!(validate_payment_amount(&schedule, PaymentKind::Deposit, 694.0).is_ok());
        assert!(validate_payment_amount(&schedule, PaymentKind::Balance, 2776.0).is_ok());
        assert!(validate_payment_amount(&schedule, PaymentKind::Full, 3470.00).is_ok());
    }

    #[test]
    fn test_validate_payment_amount_mismatch() {
        let schedule = calculate_schedule(Decimal::from(3470), &terms(20), issued_at()).unwrap();
        let err = validate_payment_amount(&schedule, PaymentKind::Deposit, 693.99).unwrap_err();
        assert_eq!(
            err,
            EngineError::ScheduleMismatch {
                kind: PaymentKind::Deposit,
                expected: Decimal::from(694),
                actual: Decimal::new(69399, 2),
            }
        );

        // Paying the deposit amount against the balance is a mismatch too
        assert!(validate_payment_amount(&schedule, PaymentKind::Balance, 694.0).is_err());
    }

    #[test]
    fn test_validate_payment_amount_rejects_garbage() {
        let schedule = calculate_schedule(Decimal::from(3470), &terms(20), issued_at()).unwrap();
        for amount in [0.0, -694.0, f64::NAN] {
            let err = validate_payment_amount(&schedule, PaymentKind::Deposit, amount).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPaymentAmount);
        }
    }
}
