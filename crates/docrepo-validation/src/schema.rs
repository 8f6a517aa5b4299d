//! Per-entity declarative validation rules.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use docrepo_core::traits::Entity;

use crate::result::ValidationResult;

/// A field validator: inspects a document value and reports problems.
pub type Validator = Arc<dyn Fn(&Value) -> ValidationResult + Send + Sync>;

/// Rule for a single document field.
#[derive(Clone)]
pub struct FieldRule {
    name: String,
    required: bool,
    unique: bool,
    validator: Validator,
}

impl FieldRule {
    /// Create an optional, non-unique rule with the given validator.
    pub fn new(
        name: impl Into<String>,
        validator: impl Fn(&Value) -> ValidationResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            required: false,
            unique: false,
            validator: Arc::new(validator),
        }
    }

    /// Mark the field as required on save.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as unique across non-deleted entities.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// The document field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the field is unique.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Run the validator, prefixing messages with the field name.
    pub fn validate(&self, value: &Value) -> ValidationResult {
        (self.validator)(value).with_prefix(&self.name)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("unique", &self.unique)
            .finish_non_exhaustive()
    }
}

/// Immutable rule table for one entity type, in declaration order.
///
/// The schema only dispatches; the rules themselves live in the field
/// validators.
pub struct ValidationSchema<E> {
    rules: Vec<FieldRule>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ValidationSchema<E> {
    /// Start building a schema.
    pub fn builder() -> ValidationSchemaBuilder<E> {
        ValidationSchemaBuilder {
            rules: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Whether the schema declares `name`.
    pub fn contains_property(&self, name: &str) -> bool {
        self.rule(name).is_some()
    }

    /// Whether `name` is declared and required.
    pub fn contains_required_property(&self, name: &str) -> bool {
        self.rule(name).is_some_and(FieldRule::is_required)
    }

    /// Whether `name` is declared and unique.
    pub fn contains_unique_property(&self, name: &str) -> bool {
        self.rule(name).is_some_and(FieldRule::is_unique)
    }

    /// Validate `value` with the rule for `name`.
    ///
    /// Callers must check [`contains_property`](Self::contains_property)
    /// first; an undeclared name yields an error result.
    pub fn validate(&self, name: &str, value: &Value) -> ValidationResult {
        match self.rule(name) {
            Some(rule) => rule.validate(value),
            None => ValidationResult::error(format!("Unknown property '{name}'")),
        }
    }

    /// All rules in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    /// Required rules in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter().filter(|rule| rule.is_required())
    }

    /// Unique rules in declaration order.
    pub fn unique_fields(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter().filter(|rule| rule.is_unique())
    }

    fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

impl<E> fmt::Debug for ValidationSchema<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationSchema")
            .field("entity", &std::any::type_name::<E>())
            .field("rules", &self.rules)
            .finish()
    }
}

/// Builder for [`ValidationSchema`].
pub struct ValidationSchemaBuilder<E> {
    rules: Vec<FieldRule>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ValidationSchemaBuilder<E> {
    /// Declare a field. Redeclaring a name replaces the earlier rule but
    /// keeps its position.
    pub fn field(mut self, rule: FieldRule) -> Self {
        match self.rules.iter_mut().find(|existing| existing.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Finish the schema.
    pub fn build(self) -> ValidationSchema<E> {
        ValidationSchema {
            rules: self.rules,
            _entity: PhantomData,
        }
    }
}
