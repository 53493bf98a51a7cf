//! Billing record

use crate::{Doctor, EntityId, Patient};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice for a patient's visit
///
/// Amounts are exact decimals; they travel as plain JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Billing {
    pub id: EntityId,
    pub patient: Patient,
    pub doctor: Doctor,
    pub invoice_amount: Decimal,
    pub payment_amount: Decimal,
    pub outstanding_balance: Decimal,
}
