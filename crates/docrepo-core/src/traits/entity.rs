//! Entity trait for records managed by a repository.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Document field holding the entity identity.
pub const ID_FIELD: &str = "id";

/// Document field holding the soft-delete flag.
pub const SOFT_DELETE_FIELD: &str = "isDeleted";

/// A record with a stable identity and a soft-delete lifecycle.
///
/// Implementors serialize to a JSON object whose `id` field is the
/// serialized [`Entity::Id`] and whose `isDeleted` field is a boolean.
/// Timestamps (`createdAt`, `updatedAt`, `deletedAt`) are part of the
/// document shape but are managed by the entity itself.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Identifier type.
    type Id: PartialEq + fmt::Display + Serialize + Send + Sync;

    /// Name of the collection documents of this type live in.
    const COLLECTION: &'static str;

    /// The entity identity.
    fn id(&self) -> &Self::Id;

    /// Whether the entity is soft-deleted.
    fn is_deleted(&self) -> bool;
}
