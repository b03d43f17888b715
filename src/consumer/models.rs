use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::{Entity, NEW_ID};

/// Billing profile of a consuming organisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DataConsumer {
    #[schema(example = 1)]
    pub consumer_id: i64,
    /// Owning user (not checked)
    pub user_id: i64,
    pub organization_name: Option<String>,
    pub contact_person: Option<String>,
    pub billing_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DataConsumer {
    pub fn new(user_id: i64) -> Self {
        Self {
            consumer_id: NEW_ID,
            user_id,
            organization_name: None,
            contact_person: None,
            billing_email: None,
            created_at: Utc::now(),
        }
    }
}

impl Entity for DataConsumer {
    fn id(&self) -> i64 {
        self.consumer_id
    }

    fn assign_id(&mut self, id: i64) {
        self.consumer_id = id;
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsumerRequest {
    pub user_id: i64,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub billing_email: Option<String>,
}

impl From<CreateConsumerRequest> for DataConsumer {
    fn from(req: CreateConsumerRequest) -> Self {
        Self {
            organization_name: req.organization_name,
            contact_person: req.contact_person,
            billing_email: req.billing_email,
            ..DataConsumer::new(req.user_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_optional_fields() {
        let req: CreateConsumerRequest = serde_json::from_value(serde_json::json!({
            "userId": 12,
            "organizationName": "EVN Fleet"
        }))
        .unwrap();
        let consumer = DataConsumer::from(req);
        assert_eq!(consumer.consumer_id, NEW_ID);
        assert_eq!(consumer.user_id, 12);
        assert_eq!(consumer.organization_name.as_deref(), Some("EVN Fleet"));
        assert!(consumer.billing_email.is_none());
    }

    #[test]
    fn test_consumer_json_is_snake_case() {
        let json = serde_json::to_value(DataConsumer::new(3)).unwrap();
        assert_eq!(json["user_id"], 3);
        assert!(json.get("organization_name").is_some());
    }
}
