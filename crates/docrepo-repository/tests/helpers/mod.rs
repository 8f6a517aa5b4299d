//! Shared test fixtures: a small entity, its schema, and a store that
//! records which operations were called.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use docrepo_core::config::RepositoryConfig;
use docrepo_core::result::AppResult;
use docrepo_core::traits::{Entity, Store};
use docrepo_core::types::{Document, StoreQuery};
use docrepo_repository::{BaseRepository, ValidatedRepository};
use docrepo_store::memory::MemoryStore;
use docrepo_validation::validators::{validate_boolean, validate_string, validate_uuid};
use docrepo_validation::{FieldRule, ValidationResult, ValidationSchema};

/// Test entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_deleted: bool,
}

impl Account {
    pub fn new(email: &str, name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            is_deleted: false,
        }
    }
}

impl Entity for Account {
    type Id = String;
    const COLLECTION: &'static str = "accounts";

    fn id(&self) -> &String {
        &self.id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

fn validate_email(value: &Value) -> ValidationResult {
    match value {
        Value::String(s) if !s.is_empty() && !s.contains('@') => {
            ValidationResult::error(format!("'{s}' is not an email address"))
        }
        other => validate_string(other),
    }
}

pub fn account_schema() -> ValidationSchema<Account> {
    ValidationSchema::builder()
        .field(FieldRule::new("id", validate_uuid).unique())
        .field(FieldRule::new("email", validate_email).required().unique())
        .field(FieldRule::new("name", validate_string).required())
        .field(FieldRule::new("isDeleted", validate_boolean).required())
        .build()
}

/// Counts calls per store operation and delegates to a [`MemoryStore`].
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub counts: AtomicUsize,
    pub exists: AtomicUsize,
    pub find_ones: AtomicUsize,
    pub finds: AtomicUsize,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
}

impl RecordingStore {
    pub fn reads(&self) -> usize {
        self.counts.load(Ordering::SeqCst)
            + self.exists.load(Ordering::SeqCst)
            + self.find_ones.load(Ordering::SeqCst)
            + self.finds.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for RecordingStore {
    async fn count(&self, collection: &str, query: &StoreQuery) -> AppResult<u64> {
        self.counts.fetch_add(1, Ordering::SeqCst);
        self.inner.count(collection, query).await
    }

    async fn exists(&self, collection: &str, query: &StoreQuery) -> AppResult<bool> {
        self.exists.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(collection, query).await
    }

    async fn find_one(&self, collection: &str, query: &StoreQuery) -> AppResult<Option<Document>> {
        self.find_ones.fetch_add(1, Ordering::SeqCst);
        self.inner.find_one(collection, query).await
    }

    async fn find(
        &self,
        collection: &str,
        query: &StoreQuery,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find(collection, query, skip, limit).await
    }

    async fn create(&self, collection: &str, document: Document) -> AppResult<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(collection, document).await
    }

    async fn update_one(
        &self,
        collection: &str,
        query: &StoreQuery,
        document: Document,
    ) -> AppResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update_one(collection, query, document).await
    }
}

pub fn base_repository(store: Arc<RecordingStore>, page_size: u64) -> BaseRepository<Account> {
    BaseRepository::new(store, ["email", "name"], &RepositoryConfig { page_size })
}

pub fn validated_repository(
    store: Arc<RecordingStore>,
) -> ValidatedRepository<Account, BaseRepository<Account>> {
    ValidatedRepository::new(base_repository(store, 50), account_schema())
}
