//! Finance view models
//!
//! The invoice state machine lives entirely in the ERP; these enums only
//! mirror the wire values the dashboard displays.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Posted,
    Cancel,
}

impl InvoiceStatus {
    pub fn from_wire(state: &str) -> Self {
        match state {
            "posted" => Self::Posted,
            "cancel" => Self::Cancel,
            _ => Self::Draft,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    #[default]
    NotPaid,
    InPayment,
    Paid,
    Reversed,
}

impl PaymentState {
    pub fn from_wire(state: &str) -> Self {
        match state {
            "in_payment" => Self::InPayment,
            "paid" => Self::Paid,
            "reversed" => Self::Reversed,
            _ => Self::NotPaid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    /// Invoice number (e.g. "INV/2024/001").
    pub name: String,
    /// Customer, "—" when unset.
    pub partner_name: String,
    pub date: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub payment_state: PaymentState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_states_default_to_draft_not_paid() {
        assert_eq!(InvoiceStatus::from_wire("weird"), InvoiceStatus::Draft);
        assert_eq!(PaymentState::from_wire("partial"), PaymentState::NotPaid);
    }

    #[test]
    fn known_wire_states_round_trip() {
        assert_eq!(InvoiceStatus::from_wire("posted"), InvoiceStatus::Posted);
        assert_eq!(InvoiceStatus::from_wire("cancel"), InvoiceStatus::Cancel);
        assert_eq!(PaymentState::from_wire("paid"), PaymentState::Paid);
        assert_eq!(PaymentState::from_wire("in_payment"), PaymentState::InPayment);
        assert_eq!(PaymentState::from_wire("reversed"), PaymentState::Reversed);
    }
}
