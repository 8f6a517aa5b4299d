//! Validating repository decorator.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use docrepo_core::error::{AppError, ErrorKind};
use docrepo_core::result::AppResult;
use docrepo_core::traits::{Entity, Repository};
use docrepo_core::types::{Document, Filter, Pagination, is_empty_value, to_document};
use docrepo_validation::{ValidationResult, ValidationSchema};

/// Wraps any [`Repository`] and validates every call against a
/// [`ValidationSchema`] before delegating.
///
/// Reads validate the filter, page, and search value together and report
/// every failure at once. Saves run three phases in order, each failing
/// before any later phase touches the store:
///
/// 1. field validators over the whole entity (all failures combined),
/// 2. required fields (first missing field wins),
/// 3. unique fields, one lookup per field through the wrapped repository
///    (first conflict wins).
///
/// Uniqueness lookups go to the wrapped repository directly, so they are
/// not re-validated and see only non-deleted entities.
pub struct ValidatedRepository<E, R> {
    inner: R,
    schema: ValidationSchema<E>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: Repository<E>> ValidatedRepository<E, R> {
    /// Wrap `inner` with validation from `schema`.
    pub fn new(inner: R, schema: ValidationSchema<E>) -> Self {
        Self {
            inner,
            schema,
            _entity: PhantomData,
        }
    }

    fn validate_filter(&self, filter: &Filter) -> ValidationResult {
        filter
            .iter()
            .filter(|(name, _)| self.schema.contains_property(name))
            .map(|(name, value)| self.schema.validate(name, value))
            .collect()
    }

    fn validate_page(page: Option<i64>) -> ValidationResult {
        match page {
            Some(page) if page < 0 => {
                ValidationResult::error(format!("The page must be a non-negative number, got {page}"))
            }
            _ => ValidationResult::ok(),
        }
    }

    fn validate_search(search: Option<&str>) -> ValidationResult {
        match search {
            Some(value) if !value.chars().all(char::is_alphanumeric) => {
                ValidationResult::error("The search value must be alphanumeric")
            }
            _ => ValidationResult::ok(),
        }
    }

    fn validate_document(&self, document: &Document) -> ValidationResult {
        self.schema
            .fields()
            .map(|rule| rule.validate(document.get(rule.name()).unwrap_or(&Value::Null)))
            .collect()
    }

    fn check_required(&self, document: &Document) -> AppResult<()> {
        match self
            .schema
            .required_fields()
            .find(|rule| is_empty_value(document.get(rule.name())))
        {
            Some(rule) => Err(AppError::required(format!("Required '{}'", rule.name()))),
            None => Ok(()),
        }
    }

    async fn check_unique(&self, entity: &E, document: &Document) -> AppResult<()> {
        for rule in self.schema.unique_fields() {
            let value = document.get(rule.name());
            let Some(value) = value.filter(|v| !is_empty_value(Some(*v))) else {
                continue;
            };

            let filter = Filter::by(rule.name(), value.clone());
            match self.inner.find_one(&filter, None).await {
                Ok(existing) if existing.id() != entity.id() => {
                    return Err(AppError::already_exists(format!(
                        "{} '{}' already exists",
                        rule.name(),
                        display_value(value)
                    )));
                }
                Ok(_) => {}
                Err(e) if e.is(ErrorKind::NotFound) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn check(&self, operation: &'static str, results: Vec<ValidationResult>) -> AppResult<()> {
        let result = ValidationResult::combine(results);
        if result.is_error() {
            warn!(
                collection = E::COLLECTION,
                operation,
                errors = ?result.errors(),
                "Rejected invalid input"
            );
        }
        result.into_result()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<E, R: fmt::Debug> fmt::Debug for ValidatedRepository<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRepository")
            .field("inner", &self.inner)
            .field("schema", &self.schema)
            .finish()
    }
}

#[async_trait]
impl<E: Entity, R: Repository<E>> Repository<E> for ValidatedRepository<E, R> {
    async fn count(&self, filter: &Filter, search: Option<&str>) -> AppResult<u64> {
        self.check(
            "count",
            vec![self.validate_filter(filter), Self::validate_search(search)],
        )?;
        self.inner.count(filter, search).await
    }

    async fn exists(&self, filter: &Filter, search: Option<&str>) -> AppResult<bool> {
        self.check(
            "exists",
            vec![self.validate_filter(filter), Self::validate_search(search)],
        )?;
        self.inner.exists(filter, search).await
    }

    async fn save(&self, entity: &E) -> AppResult<()> {
        let document = to_document(entity)?;

        self.check("save", vec![self.validate_document(&document)])?;
        self.check_required(&document)?;
        self.check_unique(entity, &document).await?;

        debug!(collection = E::COLLECTION, id = %entity.id(), "Validation passed");
        self.inner.save(entity).await
    }

    async fn find_one(&self, filter: &Filter, search: Option<&str>) -> AppResult<E> {
        self.check(
            "find_one",
            vec![self.validate_filter(filter), Self::validate_search(search)],
        )?;
        self.inner.find_one(filter, search).await
    }

    async fn find_many(
        &self,
        filter: &Filter,
        page: Option<i64>,
        search: Option<&str>,
    ) -> AppResult<Vec<E>> {
        self.check(
            "find_many",
            vec![
                self.validate_filter(filter),
                Self::validate_page(page),
                Self::validate_search(search),
            ],
        )?;
        self.inner.find_many(filter, page, search).await
    }

    async fn paginate(
        &self,
        filter: &Filter,
        page: Option<i64>,
        search: Option<&str>,
    ) -> AppResult<Pagination> {
        self.check(
            "paginate",
            vec![
                self.validate_filter(filter),
                Self::validate_page(page),
                Self::validate_search(search),
            ],
        )?;
        self.inner.paginate(filter, page, search).await
    }
}
