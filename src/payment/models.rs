use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::MarketError;
use crate::persistence::{Entity, NEW_ID};

/// Payment outcome. Only successful payments are ever recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum PaymentStatus {
    #[serde(rename = "SUCCESS")]
    Success,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "SUCCESS",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(PaymentStatus::Success),
            other => Err(MarketError::Storage(format!(
                "unknown payment status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Payment {
    #[schema(example = 1)]
    pub payment_id: i64,
    pub consumer_id: i64,
    #[schema(value_type = String, example = "10.00")]
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    #[schema(example = "card")]
    pub payment_method: String,
    #[schema(example = "purchase")]
    pub payment_type: String,
    pub status: PaymentStatus,
    /// Random UUID v4, unique per payment
    pub transaction_ref: String,
    pub notes: String,
}

impl Payment {
    /// A successful, unsaved payment stamped with the current time and a
    /// fresh transaction reference
    pub fn settled(
        consumer_id: i64,
        amount: Decimal,
        payment_method: String,
        payment_type: String,
        notes: String,
    ) -> Self {
        Self {
            payment_id: NEW_ID,
            consumer_id,
            amount,
            payment_date: Utc::now(),
            payment_method,
            payment_type,
            status: PaymentStatus::Success,
            transaction_ref: uuid::Uuid::new_v4().to_string(),
            notes,
        }
    }
}

impl Entity for Payment {
    fn id(&self) -> i64 {
        self.payment_id
    }

    fn assign_id(&mut self, id: i64) {
        self.payment_id = id;
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[schema(example = 1)]
    pub consumer_id: i64,
    #[schema(value_type = String, example = "10.00")]
    pub amount: Decimal,
    #[schema(example = "card")]
    pub method: String,
    #[serde(rename = "type")]
    #[schema(example = "purchase")]
    pub payment_type: String,
    #[serde(default)]
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(PaymentStatus::Success).unwrap(),
            "SUCCESS"
        );
        assert_eq!(
            "SUCCESS".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Success
        );
        assert!("FAILED".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_settled_payment_fields() {
        let before = Utc::now();
        let payment = Payment::settled(
            4,
            Decimal::new(1000, 2),
            "card".into(),
            "purchase".into(),
            String::new(),
        );
        assert_eq!(payment.payment_id, NEW_ID);
        assert_eq!(payment.status, PaymentStatus::Success);
        assert!(payment.payment_date >= before);
        assert!(uuid::Uuid::parse_str(&payment.transaction_ref).is_ok());
    }

    #[test]
    fn test_create_request_uses_type_key() {
        let req: CreatePaymentRequest = serde_json::from_value(serde_json::json!({
            "consumerId": 999,
            "amount": 10.0,
            "method": "card",
            "type": "purchase"
        }))
        .unwrap();
        assert_eq!(req.consumer_id, 999);
        assert_eq!(req.payment_type, "purchase");
        assert_eq!(req.note, "");
        assert_eq!(req.amount, Decimal::new(10, 0));
    }
}
