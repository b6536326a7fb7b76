//! # ruta - Declarative Page Routing
//!
//! `ruta` keeps the *declaration* of a client-side page map strictly apart
//! from the *mechanics* of matching it. An application declares a static
//! [`RouteTable`] once at startup — one fallback page plus named routes —
//! and hands it to a [`Resolver`], which selects a page for every navigated
//! path and binds named parameter segments.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ruta::{route_table, Resolver, routing::SegmentRouter};
//!
//! let table = route_table! {
//!     fallback: NOT_FOUND,
//!     home: "/" => HOME,
//!     collection: "/collections/:name" => COLLECTION,
//! };
//!
//! let router = SegmentRouter::new(table);
//! let resolved = router.resolve("/collections/foo");
//! assert_eq!(resolved.params().unwrap().get("name"), Some("foo"));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use ruta_core::{
    // Error types
    BoxError,
    // Table
    NamedRoute,
    // Page
    Page,
    // Patterns & parameters
    Params,
    PathPattern,
    PatternError,
    // Resolution
    Resolution,
    ResolvedRoute,
    Resolver,
    RouteEntry,
    RouteTable,
    RouteTableBuilder,
    RutaError,
    Segment,
    TableError,
};

mod macros;
pub mod routing;
pub mod testing;

/// Prelude module - common imports for Ruta.
///
/// # Usage
///
/// ```rust,ignore
/// use ruta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Page, Params, Resolution, Resolver, RouteTable, RouteTableBuilder,
        routing::SegmentRouter,
    };
}
