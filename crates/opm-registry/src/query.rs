//! # Query Service
//!
//! Read-only façade over the metadata store. Adds response shaping on
//! top of the raw records: search rows with latest-version data, and the
//! assembled package detail payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use opm_core::{Org, Package, PackageId, PackageKind, RegistryError, Timestamp, Version};
use opm_store::{MetadataStore, StoreError};

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Package name.
    pub name: String,
    /// Tag of the most recently created version, if any exists.
    pub latest_version_tag: Option<String>,
    /// Creation time of the latest version, or of the package itself when
    /// no version exists yet.
    pub updated_at: Timestamp,
    /// All-time download counter.
    pub download_count: u64,
    /// The package's search tags.
    pub tags: Vec<String>,
    /// Package category.
    pub kind: PackageKind,
}

/// The assembled detail payload for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetail {
    /// The package record.
    pub package: Package,
    /// Every version, ordered by creation time ascending.
    pub versions: Vec<Version>,
    /// The owning organization, if the package references one that
    /// exists. A dangling reference yields `None` — the org attribute is
    /// not a hard foreign key.
    pub org: Option<Org>,
}

/// Read-only listing and detail operations.
///
/// Stateless: holds only the store handle. Every operation is safe to
/// call repeatedly and concurrently.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn MetadataStore>,
}

impl QueryService {
    /// Build a query service over a store.
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }

    /// Search packages by case-insensitive substring match against name
    /// and tags. An empty query matches everything. Results are ordered
    /// ascending by name.
    pub fn search(&self, query_text: &str) -> Result<Vec<SearchResult>, RegistryError> {
        let needle = query_text.trim().to_lowercase();
        let mut results = Vec::new();
        for package in self.store.list_packages()? {
            if !needle.is_empty() && !Self::matches(&package, &needle) {
                continue;
            }
            results.push(self.shape_result(&package)?);
        }
        results.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(results)
    }

    /// Assemble one package with its full version list and owning org.
    pub fn get_details(&self, package_id: PackageId) -> Result<PackageDetail, RegistryError> {
        let package = self.store.get_package(package_id)?;
        let versions = self.store.list_versions(package_id)?;
        let org = match package.org_id {
            Some(org_id) => match self.store.get_org(org_id) {
                Ok(org) => Some(org),
                Err(StoreError::NotFound { .. }) => None,
                Err(other) => return Err(other.into()),
            },
            None => None,
        };
        Ok(PackageDetail {
            package,
            versions,
            org,
        })
    }

    /// All versions of a package, ordered by creation time ascending.
    pub fn list_for_package(&self, package_id: PackageId) -> Result<Vec<Version>, RegistryError> {
        Ok(self.store.list_versions(package_id)?)
    }

    /// All packages in creation order.
    pub fn list_packages(&self) -> Result<Vec<Package>, RegistryError> {
        Ok(self.store.list_packages()?)
    }

    /// All organizations in creation order.
    pub fn list_orgs(&self) -> Result<Vec<Org>, RegistryError> {
        Ok(self.store.list_orgs()?)
    }

    fn matches(package: &Package, needle: &str) -> bool {
        package.name.to_lowercase().contains(needle)
            || package
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    fn shape_result(&self, package: &Package) -> Result<SearchResult, RegistryError> {
        let versions = self.store.list_versions(package.id)?;
        let latest = versions.last();
        Ok(SearchResult {
            name: package.name.clone(),
            latest_version_tag: latest.map(|v| v.tag_name.clone()),
            updated_at: latest.map_or(package.created_at, |v| v.created_at),
            download_count: package.downloads,
            tags: package.tags.clone(),
            kind: package.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opm_core::{ContentHash, DevStatus, NewOrg, NewPackage, NewVersion};
    use opm_store::MemoryStore;

    fn service() -> (Arc<MemoryStore>, QueryService) {
        let store = Arc::new(MemoryStore::new());
        let query = QueryService::new(store.clone());
        (store, query)
    }

    fn seed_package(store: &MemoryStore, name: &str, tags: &[&str]) -> Package {
        store
            .create_package(NewPackage {
                name: name.to_string(),
                author: "NoahR02".to_string(),
                license: None,
                kind: PackageKind::Library,
                dev_status: DevStatus::Alpha,
                org_id: None,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            })
            .unwrap()
    }

    fn seed_version(store: &MemoryStore, package: &Package, tag: &str) -> Version {
        store
            .create_version(
                package.id,
                NewVersion {
                    tag_name: tag.to_string(),
                    content_hash: ContentHash::compute(tag.as_bytes()),
                    author: "NoahR02".to_string(),
                },
            )
            .unwrap()
    }

    // ── Search ───────────────────────────────────────────────────────

    #[test]
    fn test_search_matches_name_substring() {
        let (store, query) = service();
        seed_package(&store, "pico editor", &["tui"]);
        seed_package(&store, "ecs", &["engine"]);
        let results = query.search("pico").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "pico editor");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (store, query) = service();
        seed_package(&store, "Pico Editor", &[]);
        assert_eq!(query.search("PICO").unwrap().len(), 1);
        assert_eq!(query.search("pico").unwrap().len(), 1);
    }

    #[test]
    fn test_search_matches_tags() {
        let (store, query) = service();
        seed_package(&store, "ecs", &["engine", "game"]);
        seed_package(&store, "pico", &["tui"]);
        let results = query.search("engine").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "ecs");
    }

    #[test]
    fn test_search_no_match_is_empty_list() {
        let (store, query) = service();
        seed_package(&store, "ecs", &[]);
        assert!(query.search("nothing-here").unwrap().is_empty());
    }

    #[test]
    fn test_empty_query_returns_all_ordered_by_name() {
        let (store, query) = service();
        seed_package(&store, "zlib", &[]);
        seed_package(&store, "alpha", &[]);
        seed_package(&store, "middle", &[]);
        let names: Vec<_> = query
            .search("")
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alpha", "middle", "zlib"]);
    }

    #[test]
    fn test_empty_query_same_set_as_list_packages() {
        let (store, query) = service();
        seed_package(&store, "zlib", &[]);
        seed_package(&store, "alpha", &[]);
        let mut searched: Vec<_> = query
            .search("")
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        let mut listed: Vec<_> = query
            .list_packages()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        searched.sort();
        listed.sort();
        assert_eq!(searched, listed);
    }

    #[test]
    fn test_search_result_carries_latest_version() {
        let (store, query) = service();
        let pkg = seed_package(&store, "ecs", &[]);
        seed_version(&store, &pkg, "v1.0");
        let v2 = seed_version(&store, &pkg, "v2.0");
        let results = query.search("ecs").unwrap();
        assert_eq!(results[0].latest_version_tag.as_deref(), Some("v2.0"));
        assert_eq!(results[0].updated_at, v2.created_at);
    }

    #[test]
    fn test_search_result_without_versions_uses_package_created_at() {
        let (store, query) = service();
        let pkg = seed_package(&store, "ecs", &[]);
        let results = query.search("ecs").unwrap();
        assert_eq!(results[0].latest_version_tag, None);
        assert_eq!(results[0].updated_at, pkg.created_at);
    }

    // ── Details ──────────────────────────────────────────────────────

    #[test]
    fn test_get_details_assembles_versions() {
        let (store, query) = service();
        let pkg = seed_package(&store, "ecs", &[]);
        seed_version(&store, &pkg, "v1.0");
        seed_version(&store, &pkg, "v1.1");
        let detail = query.get_details(pkg.id).unwrap();
        assert_eq!(detail.package.id, pkg.id);
        let tags: Vec<_> = detail.versions.iter().map(|v| v.tag_name.as_str()).collect();
        assert_eq!(tags, vec!["v1.0", "v1.1"]);
        assert!(detail.org.is_none());
    }

    #[test]
    fn test_get_details_includes_org() {
        let (store, query) = service();
        let org = store
            .create_org(NewOrg {
                name: "Core Dev Team".to_string(),
                author: "Odin".to_string(),
            })
            .unwrap();
        let pkg = store
            .create_package(NewPackage {
                name: "ecs".to_string(),
                author: "NoahR02".to_string(),
                license: None,
                kind: PackageKind::Library,
                dev_status: DevStatus::Alpha,
                org_id: Some(org.id),
                tags: vec![],
            })
            .unwrap();
        let detail = query.get_details(pkg.id).unwrap();
        assert_eq!(detail.org, Some(org));
    }

    #[test]
    fn test_get_details_missing_package() {
        let (_store, query) = service();
        assert!(matches!(
            query.get_details(PackageId(404)).unwrap_err(),
            RegistryError::NotFound { kind: "package", .. }
        ));
    }

    #[test]
    fn test_dangling_org_reference_yields_none() {
        let (store, query) = service();
        let pkg = store
            .create_package(NewPackage {
                name: "ecs".to_string(),
                author: "NoahR02".to_string(),
                license: None,
                kind: PackageKind::Library,
                dev_status: DevStatus::Alpha,
                org_id: Some(opm_core::OrgId(77)),
                tags: vec![],
            })
            .unwrap();
        let detail = query.get_details(pkg.id).unwrap();
        assert!(detail.org.is_none());
    }

    // ── Listings ─────────────────────────────────────────────────────

    #[test]
    fn test_list_for_package_missing() {
        let (_store, query) = service();
        assert!(query.list_for_package(PackageId(1)).is_err());
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let (store, query) = service();
        let pkg = seed_package(&store, "ecs", &["engine"]);
        seed_version(&store, &pkg, "v1.0");
        let before = store.list_packages().unwrap();
        query.search("ecs").unwrap();
        query.get_details(pkg.id).unwrap();
        query.list_for_package(pkg.id).unwrap();
        assert_eq!(store.list_packages().unwrap(), before);
    }
}
