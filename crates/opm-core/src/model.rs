//! # Metadata Model — Package, Version, Org
//!
//! The persisted record types of the registry and the field structs used
//! to create them.
//!
//! ## Ownership
//!
//! - A `Version` is exclusively owned by its `Package`: it is created only
//!   under an existing package and is never reassigned.
//! - A `Package` may reference zero or one owning `Org` in addition to its
//!   individual maintainers. The reference is an optional attribute, not a
//!   hard foreign key.
//!
//! ## Immutability
//!
//! `id` and `created_at` are assigned by the Metadata Store and never
//! change. A `Version` is a point-in-time snapshot: every field is fixed
//! at creation. The `New*` structs deliberately omit `id` and
//! `created_at`, so a caller-supplied value for either is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::hash::ContentHash;
use crate::id::{OrgId, PackageId, VersionId};
use crate::temporal::Timestamp;

// ─── Category Enums ──────────────────────────────────────────────────

/// The category of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    /// A reusable library.
    Library,
    /// A demonstration or example project.
    Demo,
    /// A standalone tool.
    Tool,
}

impl Default for PackageKind {
    fn default() -> Self {
        Self::Library
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Library => "library",
            Self::Demo => "demo",
            Self::Tool => "tool",
        };
        f.write_str(s)
    }
}

/// The lifecycle stage of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevStatus {
    /// Early development; interfaces unstable.
    Alpha,
    /// Feature-complete but still stabilizing.
    Beta,
    /// Release candidate awaiting publication.
    PrePublished,
    /// Stable, published release line.
    Final,
}

impl Default for DevStatus {
    fn default() -> Self {
        Self::Alpha
    }
}

impl std::fmt::Display for DevStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::PrePublished => "pre_published",
            Self::Final => "final",
        };
        f.write_str(s)
    }
}

// ─── Persisted Records ───────────────────────────────────────────────

/// A named unit of distributable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Store-assigned identifier. Immutable.
    pub id: PackageId,
    /// Registry-wide unique name.
    pub name: String,
    /// Login of the creator.
    pub author: String,
    /// Logins permitted to publish versions, in append order.
    pub maintainers: Vec<String>,
    /// SPDX-style license string, if declared.
    pub license: Option<String>,
    /// Package category.
    pub kind: PackageKind,
    /// Lifecycle stage.
    pub dev_status: DevStatus,
    /// Owning organization, if any.
    pub org_id: Option<OrgId>,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// All-time download counter.
    pub downloads: u64,
    /// Set once at creation by the store. Immutable.
    pub created_at: Timestamp,
}

impl Package {
    /// Whether the given login may publish under this package.
    ///
    /// True for the author and for listed maintainers. Admin override is
    /// the Mutation Service's concern, not the record's.
    pub fn is_owner(&self, login: &str) -> bool {
        self.author == login || self.maintainers.iter().any(|m| m == login)
    }
}

/// One immutable release of a package's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Store-assigned identifier. Immutable.
    pub id: VersionId,
    /// Owning package. A version cannot outlive or be reassigned from it.
    pub package_id: PackageId,
    /// Human label, unique per package (e.g. "v1.2.3").
    pub tag_name: String,
    /// Content-addressing identifier of the release payload.
    pub content_hash: ContentHash,
    /// Login of the publisher.
    pub author: String,
    /// Set once at creation by the store. Immutable.
    pub created_at: Timestamp,
}

/// An organizational identity that can own or co-maintain packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Org {
    /// Store-assigned identifier. Immutable.
    pub id: OrgId,
    /// Registry-wide unique name.
    pub name: String,
    /// Login of the creator.
    pub author: String,
    /// Set once at creation by the store. Immutable.
    pub created_at: Timestamp,
}

// ─── Creation Field Structs ──────────────────────────────────────────

/// Fields for creating a package. No `id`, no `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPackage {
    /// Registry-wide unique name. Must be non-empty.
    pub name: String,
    /// Creator login. The Mutation Service fills this from the submitting
    /// identity unless an admin overrides it.
    pub author: String,
    /// SPDX-style license string, if declared.
    pub license: Option<String>,
    /// Package category.
    pub kind: PackageKind,
    /// Lifecycle stage.
    pub dev_status: DevStatus,
    /// Owning organization, if any.
    pub org_id: Option<OrgId>,
    /// Free-form search tags.
    pub tags: Vec<String>,
}

/// Fields for creating a version. No `id`, no `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVersion {
    /// Human label, unique per package. Must be non-empty.
    pub tag_name: String,
    /// Content-addressing identifier of the release payload.
    pub content_hash: ContentHash,
    /// Publisher login. Filled by the Mutation Service.
    pub author: String,
}

/// Fields for creating an organization. No `id`, no `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrg {
    /// Registry-wide unique name. Must be non-empty.
    pub name: String,
    /// Creator login. Filled by the Mutation Service.
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(author: &str, maintainers: &[&str]) -> Package {
        Package {
            id: PackageId(1),
            name: "ecs".to_string(),
            author: author.to_string(),
            maintainers: maintainers.iter().map(|m| m.to_string()).collect(),
            license: Some("Unlicense".to_string()),
            kind: PackageKind::Library,
            dev_status: DevStatus::Beta,
            org_id: None,
            tags: vec!["ecs".to_string(), "engine".to_string()],
            downloads: 0,
            created_at: Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
        }
    }

    #[test]
    fn test_is_owner_author() {
        let pkg = package("NoahR02", &[]);
        assert!(pkg.is_owner("NoahR02"));
    }

    #[test]
    fn test_is_owner_maintainer() {
        let pkg = package("NoahR02", &["Yuki"]);
        assert!(pkg.is_owner("Yuki"));
    }

    #[test]
    fn test_is_owner_rejects_stranger() {
        let pkg = package("NoahR02", &["Yuki"]);
        assert!(!pkg.is_owner("intruder"));
        // Exact match only — no case folding.
        assert!(!pkg.is_owner("noahr02"));
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(
            serde_json::to_string(&PackageKind::Library).unwrap(),
            "\"library\""
        );
        assert_eq!(
            serde_json::to_string(&DevStatus::PrePublished).unwrap(),
            "\"pre_published\""
        );
    }

    #[test]
    fn test_package_serde_roundtrip() {
        let pkg = package("NoahR02", &["Yuki"]);
        let json = serde_json::to_string(&pkg).unwrap();
        let parsed: Package = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pkg);
    }
}
