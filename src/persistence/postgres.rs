//! PostgreSQL storage backend
//!
//! One repository per table (see `sql/schema.sql`). Ids come from
//! `BIGSERIAL` columns; saving a record that already carries an id is an
//! upsert on the primary key.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::str::FromStr;

use super::repository::{NEW_ID, PaymentRepository, Repository, UserRepository};
use crate::consumer::DataConsumer;
use crate::dataset::Dataset;
use crate::error::{MarketError, Result};
use crate::payment::Payment;
use crate::user_auth::User;

/// Parse an enum column. A value outside the enum is bad stored data, not a
/// caller error.
fn decode<T>(column: &str, raw: &str) -> Result<T>
where
    T: FromStr<Err = MarketError>,
{
    raw.parse()
        .map_err(|e| MarketError::Storage(format!("invalid {} in storage: {}", column, e)))
}

// ============================================================================
// Users
// ============================================================================

const USER_COLUMNS: &str = "user_id, full_name, email, password, role, created_at, status";

fn user_from_row(r: &PgRow) -> Result<User> {
    let status: Option<String> = r.try_get("status")?;
    Ok(User {
        user_id: r.try_get("user_id")?,
        full_name: r.try_get("full_name")?,
        email: r.try_get("email")?,
        password: r.try_get("password")?,
        role: decode("role", &r.try_get::<String, _>("role")?)?,
        created_at: r.try_get("created_at")?,
        status: status.map(|s| decode("status", &s)).transpose()?,
    })
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<User> for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE user_id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users ORDER BY user_id",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    async fn save(&self, user: User) -> Result<User> {
        let status = user.status.map(|s| s.as_str());
        let row = if user.user_id == NEW_ID {
            sqlx::query(&format!(
                r#"INSERT INTO users (full_name, email, password, role, created_at, status)
                   VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}"#,
                USER_COLUMNS
            ))
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(status)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(&format!(
                r#"INSERT INTO users (user_id, full_name, email, password, role, created_at, status)
                   VALUES ($1, $2, $3, $4, $5, $6, $7)
                   ON CONFLICT (user_id) DO UPDATE SET
                       full_name = EXCLUDED.full_name, email = EXCLUDED.email,
                       password = EXCLUDED.password, role = EXCLUDED.role,
                       created_at = EXCLUDED.created_at, status = EXCLUDED.status
                   RETURNING {}"#,
                USER_COLUMNS
            ))
            .bind(user.user_id)
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(status)
            .fetch_one(&self.pool)
            .await?
        };
        user_from_row(&row)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = $1 ORDER BY user_id LIMIT 1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}

// ============================================================================
// Datasets
// ============================================================================

const DATASET_COLUMNS: &str = "dataset_id, provider_id, port_id, name, description, category, \
     price, access_type, data_format, data_size_mb, upload_date, last_updated, status, visibility";

fn dataset_from_row(r: &PgRow) -> Result<Dataset> {
    Ok(Dataset {
        dataset_id: r.try_get("dataset_id")?,
        provider_id: r.try_get("provider_id")?,
        port_id: r.try_get("port_id")?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        category: r.try_get("category")?,
        price: r.try_get("price")?,
        access_type: r.try_get("access_type")?,
        data_format: r.try_get("data_format")?,
        data_size_mb: r.try_get("data_size_mb")?,
        upload_date: r.try_get("upload_date")?,
        last_updated: r.try_get("last_updated")?,
        status: r.try_get("status")?,
        visibility: r.try_get("visibility")?,
    })
}

pub struct PgDatasetRepository {
    pool: PgPool,
}

impl PgDatasetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Dataset> for PgDatasetRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Dataset>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM datasets WHERE dataset_id = $1",
            DATASET_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(dataset_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Dataset>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM datasets ORDER BY dataset_id",
            DATASET_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(dataset_from_row).collect()
    }

    async fn save(&self, d: Dataset) -> Result<Dataset> {
        let row = if d.dataset_id == NEW_ID {
            sqlx::query(&format!(
                r#"INSERT INTO datasets (provider_id, port_id, name, description, category,
                       price, access_type, data_format, data_size_mb, upload_date,
                       last_updated, status, visibility)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                   RETURNING {}"#,
                DATASET_COLUMNS
            ))
            .bind(d.provider_id)
            .bind(d.port_id)
            .bind(&d.name)
            .bind(&d.description)
            .bind(&d.category)
            .bind(d.price)
            .bind(&d.access_type)
            .bind(&d.data_format)
            .bind(d.data_size_mb)
            .bind(d.upload_date)
            .bind(d.last_updated)
            .bind(&d.status)
            .bind(&d.visibility)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(&format!(
                r#"INSERT INTO datasets (dataset_id, provider_id, port_id, name, description,
                       category, price, access_type, data_format, data_size_mb, upload_date,
                       last_updated, status, visibility)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                   ON CONFLICT (dataset_id) DO UPDATE SET
                       provider_id = EXCLUDED.provider_id, port_id = EXCLUDED.port_id,
                       name = EXCLUDED.name, description = EXCLUDED.description,
                       category = EXCLUDED.category, price = EXCLUDED.price,
                       access_type = EXCLUDED.access_type, data_format = EXCLUDED.data_format,
                       data_size_mb = EXCLUDED.data_size_mb, upload_date = EXCLUDED.upload_date,
                       last_updated = EXCLUDED.last_updated, status = EXCLUDED.status,
                       visibility = EXCLUDED.visibility
                   RETURNING {}"#,
                DATASET_COLUMNS
            ))
            .bind(d.dataset_id)
            .bind(d.provider_id)
            .bind(d.port_id)
            .bind(&d.name)
            .bind(&d.description)
            .bind(&d.category)
            .bind(d.price)
            .bind(&d.access_type)
            .bind(&d.data_format)
            .bind(d.data_size_mb)
            .bind(d.upload_date)
            .bind(d.last_updated)
            .bind(&d.status)
            .bind(&d.visibility)
            .fetch_one(&self.pool)
            .await?
        };
        dataset_from_row(&row)
    }
}

// ============================================================================
// Consumers
// ============================================================================

const CONSUMER_COLUMNS: &str =
    "consumer_id, user_id, organization_name, contact_person, billing_email, created_at";

fn consumer_from_row(r: &PgRow) -> Result<DataConsumer> {
    Ok(DataConsumer {
        consumer_id: r.try_get("consumer_id")?,
        user_id: r.try_get("user_id")?,
        organization_name: r.try_get("organization_name")?,
        contact_person: r.try_get("contact_person")?,
        billing_email: r.try_get("billing_email")?,
        created_at: r.try_get("created_at")?,
    })
}

pub struct PgConsumerRepository {
    pool: PgPool,
}

impl PgConsumerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<DataConsumer> for PgConsumerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<DataConsumer>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM data_consumers WHERE consumer_id = $1",
            CONSUMER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(consumer_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<DataConsumer>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM data_consumers ORDER BY consumer_id",
            CONSUMER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(consumer_from_row).collect()
    }

    async fn save(&self, c: DataConsumer) -> Result<DataConsumer> {
        let row = if c.consumer_id == NEW_ID {
            sqlx::query(&format!(
                r#"INSERT INTO data_consumers (user_id, organization_name, contact_person,
                       billing_email, created_at)
                   VALUES ($1, $2, $3, $4, $5) RETURNING {}"#,
                CONSUMER_COLUMNS
            ))
            .bind(c.user_id)
            .bind(&c.organization_name)
            .bind(&c.contact_person)
            .bind(&c.billing_email)
            .bind(c.created_at)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(&format!(
                r#"INSERT INTO data_consumers (consumer_id, user_id, organization_name,
                       contact_person, billing_email, created_at)
                   VALUES ($1, $2, $3, $4, $5, $6)
                   ON CONFLICT (consumer_id) DO UPDATE SET
                       user_id = EXCLUDED.user_id,
                       organization_name = EXCLUDED.organization_name,
                       contact_person = EXCLUDED.contact_person,
                       billing_email = EXCLUDED.billing_email,
                       created_at = EXCLUDED.created_at
                   RETURNING {}"#,
                CONSUMER_COLUMNS
            ))
            .bind(c.consumer_id)
            .bind(c.user_id)
            .bind(&c.organization_name)
            .bind(&c.contact_person)
            .bind(&c.billing_email)
            .bind(c.created_at)
            .fetch_one(&self.pool)
            .await?
        };
        consumer_from_row(&row)
    }
}

// ============================================================================
// Payments
// ============================================================================

const PAYMENT_COLUMNS: &str = "payment_id, consumer_id, amount, payment_date, payment_method, \
     payment_type, status, transaction_ref, notes";

fn payment_from_row(r: &PgRow) -> Result<Payment> {
    Ok(Payment {
        payment_id: r.try_get("payment_id")?,
        consumer_id: r.try_get("consumer_id")?,
        amount: r.try_get("amount")?,
        payment_date: r.try_get("payment_date")?,
        payment_method: r.try_get("payment_method")?,
        payment_type: r.try_get("payment_type")?,
        status: decode("status", &r.try_get::<String, _>("status")?)?,
        transaction_ref: r.try_get("transaction_ref")?,
        notes: r.try_get("notes")?,
    })
}

pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Payment> for PgPaymentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Payment>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM payments WHERE payment_id = $1",
            PAYMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(payment_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Payment>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM payments ORDER BY payment_id",
            PAYMENT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(payment_from_row).collect()
    }

    async fn save(&self, p: Payment) -> Result<Payment> {
        let row = if p.payment_id == NEW_ID {
            sqlx::query(&format!(
                r#"INSERT INTO payments (consumer_id, amount, payment_date, payment_method,
                       payment_type, status, transaction_ref, notes)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}"#,
                PAYMENT_COLUMNS
            ))
            .bind(p.consumer_id)
            .bind(p.amount)
            .bind(p.payment_date)
            .bind(&p.payment_method)
            .bind(&p.payment_type)
            .bind(p.status.as_str())
            .bind(&p.transaction_ref)
            .bind(&p.notes)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query(&format!(
                r#"INSERT INTO payments (payment_id, consumer_id, amount, payment_date,
                       payment_method, payment_type, status, transaction_ref, notes)
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                   ON CONFLICT (payment_id) DO UPDATE SET
                       consumer_id = EXCLUDED.consumer_id, amount = EXCLUDED.amount,
                       payment_date = EXCLUDED.payment_date,
                       payment_method = EXCLUDED.payment_method,
                       payment_type = EXCLUDED.payment_type, status = EXCLUDED.status,
                       transaction_ref = EXCLUDED.transaction_ref, notes = EXCLUDED.notes
                   RETURNING {}"#,
                PAYMENT_COLUMNS
            ))
            .bind(p.payment_id)
            .bind(p.consumer_id)
            .bind(p.amount)
            .bind(p.payment_date)
            .bind(&p.payment_method)
            .bind(&p.payment_type)
            .bind(p.status.as_str())
            .bind(&p.transaction_ref)
            .bind(&p.notes)
            .fetch_one(&self.pool)
            .await?
        };
        payment_from_row(&row)
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    async fn find_by_consumer(&self, consumer_id: i64) -> Result<Vec<Payment>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM payments WHERE consumer_id = $1 ORDER BY payment_id",
            PAYMENT_COLUMNS
        ))
        .bind(consumer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(payment_from_row).collect()
    }
}
