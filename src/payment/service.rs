use rust_decimal::Decimal;
use std::sync::Arc;

use super::models::Payment;
use crate::consumer::DataConsumer;
use crate::error::{MarketError, Result};
use crate::persistence::{PaymentRepository, Repository};

pub struct PaymentService {
    consumers: Arc<dyn Repository<DataConsumer>>,
    payments: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(
        consumers: Arc<dyn Repository<DataConsumer>>,
        payments: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            consumers,
            payments,
        }
    }

    /// Record a successful payment for an existing consumer.
    ///
    /// Fails with `ConsumerNotFound` (and writes nothing) when the consumer
    /// does not exist. There is no idempotency key: identical calls record
    /// separate payments with distinct transaction references.
    pub async fn create_payment(
        &self,
        consumer_id: i64,
        amount: Decimal,
        method: &str,
        payment_type: &str,
        note: &str,
    ) -> Result<Payment> {
        self.require_consumer(consumer_id).await?;

        let payment = Payment::settled(
            consumer_id,
            amount,
            method.to_string(),
            payment_type.to_string(),
            note.to_string(),
        );
        let payment = self.payments.save(payment).await?;
        tracing::info!(
            payment_id = payment.payment_id,
            consumer_id,
            amount = %payment.amount,
            transaction_ref = %payment.transaction_ref,
            "Payment recorded"
        );
        Ok(payment)
    }

    pub async fn get_payment(&self, payment_id: i64) -> Result<Option<Payment>> {
        self.payments.find_by_id(payment_id).await
    }

    pub async fn list_payments_for_consumer(&self, consumer_id: i64) -> Result<Vec<Payment>> {
        self.require_consumer(consumer_id).await?;
        self.payments.find_by_consumer(consumer_id).await
    }

    async fn require_consumer(&self, consumer_id: i64) -> Result<DataConsumer> {
        self.consumers
            .find_by_id(consumer_id)
            .await?
            .ok_or(MarketError::ConsumerNotFound(consumer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentStatus;
    use crate::persistence::MemoryRepository;
    use chrono::Utc;

    struct Harness {
        service: PaymentService,
        consumers: Arc<MemoryRepository<DataConsumer>>,
        payments: Arc<MemoryRepository<Payment>>,
    }

    impl Harness {
        fn new() -> Self {
            let consumers = Arc::new(MemoryRepository::<DataConsumer>::new());
            let payments = Arc::new(MemoryRepository::<Payment>::new());
            Self {
                service: PaymentService::new(consumers.clone(), payments.clone()),
                consumers,
                payments,
            }
        }

        async fn consumer(&self) -> i64 {
            self.consumers
                .save(DataConsumer::new(1))
                .await
                .unwrap()
                .consumer_id
        }
    }

    #[tokio::test]
    async fn test_missing_consumer_fails_and_writes_nothing() {
        let h = Harness::new();
        let err = h
            .service
            .create_payment(999, Decimal::new(100, 1), "card", "purchase", "")
            .await
            .unwrap_err();

        assert!(matches!(err, MarketError::ConsumerNotFound(999)));
        assert!(h.payments.is_empty());
    }

    #[tokio::test]
    async fn test_payment_fields() {
        let h = Harness::new();
        let consumer_id = h.consumer().await;
        let before = Utc::now();

        let payment = h
            .service
            .create_payment(consumer_id, Decimal::new(1000, 2), "card", "purchase", "first")
            .await
            .unwrap();

        assert!(payment.payment_id > 0);
        assert_eq!(payment.consumer_id, consumer_id);
        assert_eq!(payment.amount, Decimal::new(1000, 2));
        assert_eq!(payment.payment_method, "card");
        assert_eq!(payment.payment_type, "purchase");
        assert_eq!(payment.notes, "first");
        assert_eq!(payment.status, PaymentStatus::Success);
        assert!(payment.payment_date >= before);
    }

    #[tokio::test]
    async fn test_repeated_calls_get_unique_refs() {
        let h = Harness::new();
        let consumer_id = h.consumer().await;

        let mut refs = std::collections::HashSet::new();
        for _ in 0..10 {
            let p = h
                .service
                .create_payment(consumer_id, Decimal::ONE, "card", "purchase", "")
                .await
                .unwrap();
            refs.insert(p.transaction_ref);
        }
        assert_eq!(refs.len(), 10);
        assert_eq!(h.payments.len(), 10);
    }

    #[tokio::test]
    async fn test_get_payment() {
        let h = Harness::new();
        let consumer_id = h.consumer().await;
        let p = h
            .service
            .create_payment(consumer_id, Decimal::ONE, "bank", "subscription", "")
            .await
            .unwrap();

        assert_eq!(h.service.get_payment(p.payment_id).await.unwrap(), Some(p));
        assert!(h.service.get_payment(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_payments_for_consumer() {
        let h = Harness::new();
        let a = h.consumer().await;
        let b = h.consumer().await;
        for consumer_id in [a, b, a] {
            h.service
                .create_payment(consumer_id, Decimal::ONE, "card", "purchase", "")
                .await
                .unwrap();
        }

        assert_eq!(h.service.list_payments_for_consumer(a).await.unwrap().len(), 2);
        assert_eq!(h.service.list_payments_for_consumer(b).await.unwrap().len(), 1);
        assert!(matches!(
            h.service.list_payments_for_consumer(777).await,
            Err(MarketError::ConsumerNotFound(777))
        ));
    }
}
