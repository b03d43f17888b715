use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::{Entity, NEW_ID};

pub const DEFAULT_STATUS: &str = "Pending";
pub const DEFAULT_VISIBILITY: &str = "Public";

/// A dataset listed by a provider
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Dataset {
    #[schema(example = 1)]
    pub dataset_id: i64,
    /// User id of the listing provider (not checked)
    pub provider_id: i64,
    pub port_id: i64,
    #[schema(example = "Hanoi charging sessions 2024")]
    pub name: String,
    pub description: String,
    #[schema(example = "Charging")]
    pub category: String,
    #[schema(value_type = String, example = "49.90")]
    pub price: Decimal,
    #[schema(example = "OneTimePurchase")]
    pub access_type: String,
    #[schema(example = "CSV")]
    pub data_format: String,
    pub data_size_mb: f64,
    pub upload_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub status: String,
    pub visibility: String,
}

impl Entity for Dataset {
    fn id(&self) -> i64 {
        self.dataset_id
    }

    fn assign_id(&mut self, id: i64) {
        self.dataset_id = id;
    }
}

/// Catalogue entry: id and name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatasetSummary {
    pub dataset_id: i64,
    pub name: String,
}

impl From<&Dataset> for DatasetSummary {
    fn from(d: &Dataset) -> Self {
        Self {
            dataset_id: d.dataset_id,
            name: d.name.clone(),
        }
    }
}

/// Provider request to list a new dataset
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishDatasetRequest {
    pub provider_id: i64,
    #[serde(default)]
    pub port_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[schema(value_type = String, example = "49.90")]
    pub price: Decimal,
    #[serde(default)]
    pub access_type: String,
    #[serde(default)]
    pub data_format: String,
    #[serde(default)]
    pub data_size_mb: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
}

impl From<PublishDatasetRequest> for Dataset {
    fn from(req: PublishDatasetRequest) -> Self {
        let now = Utc::now();
        Self {
            dataset_id: NEW_ID,
            provider_id: req.provider_id,
            port_id: req.port_id,
            name: req.name,
            description: req.description,
            category: req.category,
            price: req.price,
            access_type: req.access_type,
            data_format: req.data_format,
            data_size_mb: req.data_size_mb,
            upload_date: now,
            last_updated: now,
            status: req.status.unwrap_or_default(),
            visibility: req.visibility.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_publish_request_defaults() {
        let req: PublishDatasetRequest = serde_json::from_value(serde_json::json!({
            "providerId": 3,
            "name": "EV trips",
            "price": "12.50"
        }))
        .unwrap();
        let dataset = Dataset::from(req);
        assert_eq!(dataset.dataset_id, NEW_ID);
        assert_eq!(dataset.provider_id, 3);
        assert_eq!(dataset.price, Decimal::from_str("12.50").unwrap());
        assert!(dataset.status.is_empty());
        assert!(dataset.visibility.is_empty());
        assert_eq!(dataset.upload_date, dataset.last_updated);
    }

    #[test]
    fn test_summary_projection() {
        let req: PublishDatasetRequest = serde_json::from_value(serde_json::json!({
            "providerId": 3,
            "name": "EV trips",
            "price": 1
        }))
        .unwrap();
        let mut dataset = Dataset::from(req);
        dataset.assign_id(9);
        assert_eq!(
            DatasetSummary::from(&dataset),
            DatasetSummary {
                dataset_id: 9,
                name: "EV trips".to_string()
            }
        );
    }
}
