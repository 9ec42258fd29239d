//! # opm-registry — Query and Mutation Services
//!
//! The stateless service layer between the API surface and the metadata
//! store.
//!
//! - [`QueryService`] — read-only listing and detail operations with
//!   response shaping (search results, assembled package detail). Safe to
//!   call repeatedly and concurrently; never mutates.
//! - [`MutationService`] — validated create operations gated by an
//!   explicit `Option<&Identity>`: unauthenticated mutation is never
//!   permitted, and version publication additionally requires ownership
//!   (author, listed maintainer, or admin).
//!
//! Both services hold only an `Arc<dyn MetadataStore>`; no state survives
//! a call. Store constraint violations are translated into the registry
//! error taxonomy unchanged, and infrastructure failures propagate as
//! `StoreUnavailable`.

pub mod mutation;
pub mod query;

pub use mutation::MutationService;
pub use query::{PackageDetail, QueryService, SearchResult};
