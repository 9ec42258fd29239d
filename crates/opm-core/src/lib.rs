//! # opm-core — Foundational Types for the Odin Package Registry
//!
//! This crate is the bedrock of the registry workspace. It defines the
//! metadata model (Package, Version, Org), the identifier newtypes, the
//! UTC-only timestamp, the content-hash newtype, and the error taxonomy
//! shared by every other crate. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `PackageId`, `VersionId`,
//!    `OrgId` — a `VersionId` cannot be passed where a `PackageId` is
//!    expected. No bare integers for identifiers.
//!
//! 2. **Server-assigned fields are unrepresentable in inputs.** The
//!    `NewPackage`/`NewVersion`/`NewOrg` field structs carry no `id` and
//!    no `created_at`; a caller cannot supply either.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision. Non-UTC inputs are rejected at construction.
//!
//! 4. **Validation reports every violation.** `ValidationError` carries
//!    the full list of violated constraints, not just the first.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `opm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod hash;
pub mod id;
pub mod identity;
pub mod model;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{ConstraintCheck, RegistryError, ValidationError};
pub use hash::ContentHash;
pub use id::{OrgId, PackageId, VersionId};
pub use identity::Identity;
pub use model::{
    DevStatus, NewOrg, NewPackage, NewVersion, Org, Package, PackageKind, Version,
};
pub use temporal::Timestamp;
