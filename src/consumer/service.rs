use chrono::Utc;
use std::sync::Arc;

use super::models::DataConsumer;
use crate::error::Result;
use crate::persistence::Repository;

pub struct ConsumerService {
    consumers: Arc<dyn Repository<DataConsumer>>,
}

impl ConsumerService {
    pub fn new(consumers: Arc<dyn Repository<DataConsumer>>) -> Self {
        Self { consumers }
    }

    /// The referenced user is not checked
    pub async fn create_consumer(&self, mut profile: DataConsumer) -> Result<DataConsumer> {
        profile.created_at = Utc::now();
        let consumer = self.consumers.save(profile).await?;
        tracing::info!(
            consumer_id = consumer.consumer_id,
            user_id = consumer.user_id,
            "Consumer profile created"
        );
        Ok(consumer)
    }

    pub async fn get_consumer(&self, consumer_id: i64) -> Result<Option<DataConsumer>> {
        self.consumers.find_by_id(consumer_id).await
    }

    pub async fn list_consumers(&self) -> Result<Vec<DataConsumer>> {
        self.consumers.find_all().await
    }
}
