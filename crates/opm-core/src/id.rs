//! # Identifier Newtypes
//!
//! Newtype wrappers for the registry's record identifiers. These prevent
//! accidental identifier confusion — you cannot pass a `VersionId` where a
//! `PackageId` is expected.
//!
//! Identifiers are sequential integers assigned by the Metadata Store at
//! creation time, starting at 1. They are never supplied by callers and
//! never reused.

use serde::{Deserialize, Serialize};

/// Unique identifier for a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageId(pub u64);

/// Unique identifier for a package version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionId(pub u64);

/// Unique identifier for an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrgId(pub u64);

impl PackageId {
    /// Access the inner integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl VersionId {
    /// Access the inner integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl OrgId {
    /// Access the inner integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "package:{}", self.0)
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "version:{}", self.0)
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "org:{}", self.0)
    }
}
