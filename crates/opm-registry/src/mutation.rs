//! # Mutation Service
//!
//! Validated create operations, gated by an explicit identity argument.
//!
//! ## Authorization
//!
//! Every operation requires an authenticated identity — unauthenticated
//! mutation is never permitted, whatever the transport allows. Version
//! publication and maintainer changes additionally require ownership:
//! the identity must be the package author, a listed maintainer, or an
//! admin.
//!
//! ## No Partial Writes
//!
//! The identity gate and ownership checks run before any store call, and
//! the store validates fully before mutating, so a rejected submission
//! leaves the store unchanged.

use std::sync::Arc;

use opm_core::{
    Identity, NewOrg, NewPackage, NewVersion, Org, Package, PackageId, RegistryError, Version,
};
use opm_store::MetadataStore;

/// Identity-gated write operations.
///
/// Stateless: holds only the store handle.
#[derive(Clone)]
pub struct MutationService {
    store: Arc<dyn MetadataStore>,
}

impl MutationService {
    /// Build a mutation service over a store.
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }

    /// Create a package on behalf of an identity.
    ///
    /// The package author is the submitting login; a caller-supplied
    /// author is honored only when the identity is an admin.
    pub fn submit_package(
        &self,
        identity: Option<&Identity>,
        mut fields: NewPackage,
    ) -> Result<Package, RegistryError> {
        let identity = require_identity(identity, "create a package")?;
        if !identity.is_admin || fields.author.is_empty() {
            fields.author = identity.login.clone();
        }
        let package = self.store.create_package(fields)?;
        tracing::info!(package = %package.id, by = %identity, "package submitted");
        Ok(package)
    }

    /// Publish a version of an existing package on behalf of an identity.
    ///
    /// Requires ownership of the package: author, listed maintainer, or
    /// admin. The version's author is always the submitting login.
    pub fn submit_version(
        &self,
        identity: Option<&Identity>,
        package_id: PackageId,
        mut fields: NewVersion,
    ) -> Result<Version, RegistryError> {
        let identity = require_identity(identity, "publish a version")?;
        let package = self.store.get_package(package_id)?;
        self.require_ownership(identity, &package)?;
        fields.author = identity.login.clone();
        let version = self.store.create_version(package_id, fields)?;
        tracing::info!(version = %version.id, package = %package_id, by = %identity, "version published");
        Ok(version)
    }

    /// Create an organization on behalf of an identity.
    pub fn submit_org(
        &self,
        identity: Option<&Identity>,
        mut fields: NewOrg,
    ) -> Result<Org, RegistryError> {
        let identity = require_identity(identity, "create an org")?;
        if !identity.is_admin || fields.author.is_empty() {
            fields.author = identity.login.clone();
        }
        let org = self.store.create_org(fields)?;
        tracing::info!(org = %org.id, by = %identity, "org submitted");
        Ok(org)
    }

    /// Append a maintainer to a package on behalf of an identity.
    ///
    /// Requires ownership of the package.
    pub fn add_maintainer(
        &self,
        identity: Option<&Identity>,
        package_id: PackageId,
        login: &str,
    ) -> Result<Package, RegistryError> {
        let identity = require_identity(identity, "modify maintainers")?;
        let package = self.store.get_package(package_id)?;
        self.require_ownership(identity, &package)?;
        Ok(self.store.add_maintainer(package_id, login)?)
    }

    fn require_ownership(
        &self,
        identity: &Identity,
        package: &Package,
    ) -> Result<(), RegistryError> {
        if package.is_owner(&identity.login) || identity.is_admin {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized(format!(
                "{} is neither author, maintainer, nor admin of {:?}",
                identity.login, package.name
            )))
        }
    }
}

fn require_identity<'a>(
    identity: Option<&'a Identity>,
    action: &str,
) -> Result<&'a Identity, RegistryError> {
    identity.ok_or_else(|| {
        RegistryError::Unauthorized(format!("authentication required to {action}"))
    })
}
