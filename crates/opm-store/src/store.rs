//! # Store Trait and Errors
//!
//! The object-safe contract every metadata backend implements, and the
//! store-level error type the services translate into the registry
//! taxonomy.

use thiserror::Error;

use opm_core::{
    NewOrg, NewPackage, NewVersion, Org, OrgId, Package, PackageId, RegistryError,
    ValidationError, Version, VersionId,
};

/// Errors surfaced by a metadata backend.
///
/// Constraint violations carry the full violation report so the caller
/// can correct a submission in one round trip. Infrastructure failures
/// are distinct from both constraint violations and missing records and
/// are propagated unchanged by the services.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write violated one or more schema constraints.
    #[error("constraint violation: {0}")]
    Constraint(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of record ("package", "version", "org").
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The backend is unreachable or failed mid-operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Build a not-found error for the given record kind and id.
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Constraint(v) => RegistryError::Validation(v),
            StoreError::NotFound { kind, id } => RegistryError::NotFound { kind, id },
            StoreError::Unavailable(msg) => RegistryError::StoreUnavailable(msg),
        }
    }
}

/// Durable, consistent storage for the registry's metadata records.
///
/// Implementations must serialize conflicting writes so the uniqueness
/// invariants hold under concurrent creates, and must never expose a
/// partially-written record to readers.
pub trait MetadataStore: Send + Sync {
    /// Create a package. Assigns `id` and `created_at`.
    ///
    /// Fails with a constraint violation if `name` is empty or already
    /// taken.
    fn create_package(&self, fields: NewPackage) -> Result<Package, StoreError>;

    /// Create a version under an existing package. Assigns `id` and
    /// `created_at`.
    ///
    /// Fails with `NotFound` if the package does not exist, and with a
    /// constraint violation if `tag_name` is empty or duplicates an
    /// existing version of the same package.
    fn create_version(
        &self,
        package_id: PackageId,
        fields: NewVersion,
    ) -> Result<Version, StoreError>;

    /// Create an organization. Assigns `id` and `created_at`.
    ///
    /// Fails with a constraint violation if `name` is empty or already
    /// taken.
    fn create_org(&self, fields: NewOrg) -> Result<Org, StoreError>;

    /// Fetch one package by id.
    fn get_package(&self, id: PackageId) -> Result<Package, StoreError>;

    /// Fetch one version by id.
    fn get_version(&self, id: VersionId) -> Result<Version, StoreError>;

    /// Fetch one organization by id.
    fn get_org(&self, id: OrgId) -> Result<Org, StoreError>;

    /// All packages in creation order. Stable across repeated calls
    /// absent writes.
    fn list_packages(&self) -> Result<Vec<Package>, StoreError>;

    /// All versions of a package, ordered by creation time ascending.
    ///
    /// Fails with `NotFound` if the package does not exist.
    fn list_versions(&self, package_id: PackageId) -> Result<Vec<Version>, StoreError>;

    /// All organizations in creation order.
    fn list_orgs(&self) -> Result<Vec<Org>, StoreError>;

    /// Append a maintainer login to a package. Idempotent per login.
    ///
    /// Returns the updated package. Fails with `NotFound` if the package
    /// does not exist, and with a constraint violation if the login is
    /// empty.
    fn add_maintainer(&self, package_id: PackageId, login: &str) -> Result<Package, StoreError>;
}
