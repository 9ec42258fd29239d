//! # opm-store — Metadata Store
//!
//! Durable, consistent storage for Package, Version, and Org records with
//! the registry's uniqueness invariants enforced at write time:
//!
//! - `Package.name` is unique registry-wide.
//! - `(Version.package_id, Version.tag_name)` is unique.
//! - `Org.name` is unique.
//!
//! ## Design
//!
//! The [`MetadataStore`] trait is the seam between the services and the
//! backing storage. It is object-safe, so the services hold an
//! `Arc<dyn MetadataStore>` and never know which backend they run on.
//! [`MemoryStore`] is the reference implementation: sequential ids
//! starting at 1, one writer lock serializing conflicting creates, and
//! insertion-order listing. A SQL-backed store would implement the same
//! trait with database constraints doing the enforcement.
//!
//! ## Crate Policy
//!
//! - Writes are visible before the call returns; a failed validation
//!   leaves the store untouched.
//! - Reads never observe a partially-written record.
//! - Store errors are never swallowed here; translation to the registry
//!   taxonomy happens in the service layer.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{MetadataStore, StoreError};
