//! # In-Memory Metadata Store
//!
//! The reference [`MetadataStore`] implementation. A single `RwLock`
//! serializes writers, which is this backend's transactional mechanism:
//! every create validates under the write lock and either commits whole
//! or leaves the maps untouched. Readers take the shared lock and can
//! never observe a half-inserted record.
//!
//! Ids are sequential per record kind, starting at 1. `BTreeMap` keyed by
//! id therefore iterates in creation order, which is the listing order
//! the store contract requires.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use opm_core::{
    ConstraintCheck, NewOrg, NewPackage, NewVersion, Org, OrgId, Package, PackageId, Timestamp,
    Version, VersionId,
};

use crate::store::{MetadataStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    packages: BTreeMap<u64, Package>,
    versions: BTreeMap<u64, Version>,
    orgs: BTreeMap<u64, Org>,
    next_package_id: u64,
    next_version_id: u64,
    next_org_id: u64,
}

impl Inner {
    fn package_name_taken(&self, name: &str) -> bool {
        self.packages.values().any(|p| p.name == name)
    }

    fn org_name_taken(&self, name: &str) -> bool {
        self.orgs.values().any(|o| o.name == name)
    }

    fn tag_taken(&self, package_id: PackageId, tag_name: &str) -> bool {
        self.versions
            .values()
            .any(|v| v.package_id == package_id && v.tag_name == tag_name)
    }
}

/// In-memory metadata store with sequential id assignment.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store. The first record of each kind gets id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for MemoryStore {
    fn create_package(&self, fields: NewPackage) -> Result<Package, StoreError> {
        let mut inner = self.inner.write();

        let mut check = ConstraintCheck::new();
        check.require(!fields.name.trim().is_empty(), "name must not be empty");
        check.require(
            !inner.package_name_taken(&fields.name),
            format!("package name already taken: {:?}", fields.name),
        );
        check.finish()?;

        inner.next_package_id += 1;
        let package = Package {
            id: PackageId(inner.next_package_id),
            name: fields.name,
            author: fields.author,
            maintainers: Vec::new(),
            license: fields.license,
            kind: fields.kind,
            dev_status: fields.dev_status,
            org_id: fields.org_id,
            tags: fields.tags,
            downloads: 0,
            created_at: Timestamp::now(),
        };
        inner.packages.insert(package.id.as_u64(), package.clone());
        tracing::info!(id = %package.id, name = %package.name, "package created");
        Ok(package)
    }

    fn create_version(
        &self,
        package_id: PackageId,
        fields: NewVersion,
    ) -> Result<Version, StoreError> {
        let mut inner = self.inner.write();

        if !inner.packages.contains_key(&package_id.as_u64()) {
            return Err(StoreError::not_found("package", package_id));
        }

        let mut check = ConstraintCheck::new();
        check.require(
            !fields.tag_name.trim().is_empty(),
            "tag_name must not be empty",
        );
        check.require(
            !inner.tag_taken(package_id, &fields.tag_name),
            format!(
                "tag already exists for {package_id}: {:?}",
                fields.tag_name
            ),
        );
        check.finish()?;

        inner.next_version_id += 1;
        let version = Version {
            id: VersionId(inner.next_version_id),
            package_id,
            tag_name: fields.tag_name,
            content_hash: fields.content_hash,
            author: fields.author,
            created_at: Timestamp::now(),
        };
        inner.versions.insert(version.id.as_u64(), version.clone());
        tracing::info!(id = %version.id, package = %package_id, tag = %version.tag_name, "version created");
        Ok(version)
    }

    fn create_org(&self, fields: NewOrg) -> Result<Org, StoreError> {
        let mut inner = self.inner.write();

        let mut check = ConstraintCheck::new();
        check.require(!fields.name.trim().is_empty(), "name must not be empty");
        check.require(
            !inner.org_name_taken(&fields.name),
            format!("org name already taken: {:?}", fields.name),
        );
        check.finish()?;

        inner.next_org_id += 1;
        let org = Org {
            id: OrgId(inner.next_org_id),
            name: fields.name,
            author: fields.author,
            created_at: Timestamp::now(),
        };
        inner.orgs.insert(org.id.as_u64(), org.clone());
        tracing::info!(id = %org.id, name = %org.name, "org created");
        Ok(org)
    }

    fn get_package(&self, id: PackageId) -> Result<Package, StoreError> {
        self.inner
            .read()
            .packages
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| StoreError::not_found("package", id))
    }

    fn get_version(&self, id: VersionId) -> Result<Version, StoreError> {
        self.inner
            .read()
            .versions
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| StoreError::not_found("version", id))
    }

    fn get_org(&self, id: OrgId) -> Result<Org, StoreError> {
        self.inner
            .read()
            .orgs
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| StoreError::not_found("org", id))
    }

    fn list_packages(&self) -> Result<Vec<Package>, StoreError> {
        Ok(self.inner.read().packages.values().cloned().collect())
    }

    fn list_versions(&self, package_id: PackageId) -> Result<Vec<Version>, StoreError> {
        let inner = self.inner.read();
        if !inner.packages.contains_key(&package_id.as_u64()) {
            return Err(StoreError::not_found("package", package_id));
        }
        Ok(inner
            .versions
            .values()
            .filter(|v| v.package_id == package_id)
            .cloned()
            .collect())
    }

    fn list_orgs(&self) -> Result<Vec<Org>, StoreError> {
        Ok(self.inner.read().orgs.values().cloned().collect())
    }

    fn add_maintainer(&self, package_id: PackageId, login: &str) -> Result<Package, StoreError> {
        let mut inner = self.inner.write();

        let mut check = ConstraintCheck::new();
        check.require(!login.trim().is_empty(), "maintainer login must not be empty");
        check.finish()?;

        let package = inner
            .packages
            .get_mut(&package_id.as_u64())
            .ok_or_else(|| StoreError::not_found("package", package_id))?;
        if !package.maintainers.iter().any(|m| m == login) {
            package.maintainers.push(login.to_string());
            tracing::info!(package = %package_id, login, "maintainer added");
        }
        Ok(package.clone())
    }
}
