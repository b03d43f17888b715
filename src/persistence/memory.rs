//! In-process storage backend
//!
//! Used by the test suites and when no PostgreSQL URL is configured.
//! Records live in a `DashMap` keyed by id; ids come from an atomic
//! counter starting at 1.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use super::repository::{Entity, NEW_ID, PaymentRepository, Repository, UserRepository};
use crate::error::Result;
use crate::payment::Payment;
use crate::user_auth::User;

pub struct MemoryRepository<E: Entity> {
    records: DashMap<i64, E>,
    next_id: AtomicI64,
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted<F>(&self, keep: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        let mut out: Vec<E> = self
            .records
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        out.sort_by_key(|e| e.id());
        out
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> Result<Option<E>> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.sorted(|_| true))
    }

    async fn save(&self, mut entity: E) -> Result<E> {
        if entity.id() == NEW_ID {
            entity.assign_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        } else {
            // Explicit ids must never be handed out again
            self.next_id
                .fetch_max(entity.id().saturating_add(1), Ordering::SeqCst);
        }
        self.records.insert(entity.id(), entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl UserRepository for MemoryRepository<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.sorted(|u| u.email == email).into_iter().next())
    }
}

#[async_trait]
impl PaymentRepository for MemoryRepository<Payment> {
    async fn find_by_consumer(&self, consumer_id: i64) -> Result<Vec<Payment>> {
        Ok(self.sorted(|p| p.consumer_id == consumer_id))
    }
}
