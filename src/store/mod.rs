//! Flat-document persistence
//!
//! Users and tasks are each persisted as one independent JSON-array file,
//! rewritten in full on every mutation. [`document::JsonDocument`] supplies
//! the shared machinery: a per-resource mutex that serializes every
//! read-modify-write cycle, and temp-file-plus-rename writes so readers and
//! crashes never see a half-written document.
//!
//! Single-process, single-backend deployment is assumed; there is no
//! cross-process coordination.

/// Serialized read-modify-write over one JSON-array file.
pub mod document;
/// Ownership-scoped task collection.
pub mod tasks;
/// Credential collection with atomic username uniqueness.
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
