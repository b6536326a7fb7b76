//! # Resolver Implementations
//!
//! This module provides the routing backends that read a
//! [`RouteTable`](crate::RouteTable):
//!
//! - **Segment routing**: Ordered first-match scan, no extra dependencies.
//! - **Matchit routing**: Radix-trie lookup via the `matchit` crate.
//!
//! # Choosing a Backend
//!
//! | Resolver | Use Case | Performance |
//! |----------|----------|-------------|
//! | `SegmentRouter` | Hand-declared tables (a handful of routes) | O(routes) scan, zero deps |
//! | `MatchitRouter` | Large or generated tables | O(path) trie lookup |
//!
//! Both backends agree on semantics: declaration order breaks ties, query
//! and fragment suffixes are not part of the matched path, and a single
//! trailing slash is insignificant.

use thiserror::Error;

mod segment;

pub use segment::SegmentRouter;

#[cfg(feature = "matchit")]
mod matchit;

#[cfg(feature = "matchit")]
pub use matchit::MatchitRouter;

/// Errors that can occur while constructing a backend from a table.
#[derive(Error, Debug)]
pub enum RouterBuildError {
    /// Two entries compile to overlapping patterns in the backend.
    #[error("conflicting route pattern `{pattern}`: {reason}")]
    ConflictingPattern {
        /// The pattern that could not be registered.
        pattern: String,
        /// The backend's explanation.
        reason: String,
    },
}
