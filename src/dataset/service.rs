use chrono::Utc;
use std::sync::Arc;

use super::models::{DEFAULT_STATUS, DEFAULT_VISIBILITY, Dataset, DatasetSummary};
use crate::error::Result;
use crate::persistence::Repository;

pub struct DatasetService {
    datasets: Arc<dyn Repository<Dataset>>,
}

impl DatasetService {
    pub fn new(datasets: Arc<dyn Repository<Dataset>>) -> Self {
        Self { datasets }
    }

    pub async fn list_all_datasets(&self) -> Result<Vec<Dataset>> {
        self.datasets.find_all().await
    }

    /// `Ok(None)` when no dataset has this id
    pub async fn get_dataset_by_id(&self, dataset_id: i64) -> Result<Option<Dataset>> {
        self.datasets.find_by_id(dataset_id).await
    }

    /// Catalogue view: id and name of every dataset
    pub async fn list_dataset_summaries(&self) -> Result<Vec<DatasetSummary>> {
        let datasets = self.datasets.find_all().await?;
        Ok(datasets.iter().map(DatasetSummary::from).collect())
    }

    /// List a provider's dataset. Price is stored as given.
    pub async fn publish_dataset(&self, mut draft: Dataset) -> Result<Dataset> {
        let now = Utc::now();
        draft.upload_date = now;
        draft.last_updated = now;
        if draft.status.is_empty() {
            draft.status = DEFAULT_STATUS.to_string();
        }
        if draft.visibility.is_empty() {
            draft.visibility = DEFAULT_VISIBILITY.to_string();
        }

        let dataset = self.datasets.save(draft).await?;
        tracing::info!(
            dataset_id = dataset.dataset_id,
            provider_id = dataset.provider_id,
            "Dataset published"
        );
        Ok(dataset)
    }
}
