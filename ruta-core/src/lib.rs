//! # ruta-core
//!
//! Core types for the Ruta page-routing library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! consumers that declare route tables without needing the resolver
//! implementations in `ruta`.
//!
//! # Two-Layer Architecture
//!
//! Ruta keeps the *declaration* of a page map strictly apart from the
//! *mechanics* of matching it:
//!
//! ## Layer 1: Declaration ([`RouteTable`])
//!
//! A static list mapping URL path patterns to page references. It is pure
//! data: one fallback page followed by the named routes in declaration
//! order. Built once at application startup, immutable thereafter.
//!
//! - **Declarative**: No matching logic lives here; malformed declarations
//!   (duplicate names, broken patterns) are refused at build time.
//! - **Non-owning**: Entries hold `&'static dyn Page` references to page
//!   descriptors owned elsewhere.
//!
//! ## Layer 2: Resolution ([`Resolver`])
//!
//! The navigating collaborator reads the table on every navigation event,
//! selects an entry for the current path and binds any named parameter
//! segments. Implementations live in the `ruta` crate.
//!
//! - **Total**: Every path resolves; unmatched paths yield the fallback.
//! - **Zero-copy**: Bound parameters borrow from the table and the path.
//!
//! # Error Types
//!
//! - [`RutaError`] - Top-level error type
//! - [`TableError`] - Table declaration errors
//! - [`PatternError`] - Path pattern parse errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod page;
mod params;
mod pattern;
mod resolve;
mod route;

// Re-exports
pub use error::{BoxError, PatternError, RutaError, TableError};
pub use page::Page;
pub use params::Params;
pub use pattern::{PathPattern, Segment};
pub use resolve::{Resolution, ResolvedRoute, Resolver};
pub use route::{NamedRoute, RouteEntry, RouteTable, RouteTableBuilder};
