//! Ordered segment-matching resolver.
//!
//! # Responsibilities
//! - Scan the table in declaration order, first match wins
//! - Compare path pieces segment by segment, binding parameters
//! - Select the fallback page when nothing matches
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A parameter segment binds exactly one non-empty path piece
//! - No regex to guarantee O(path) matching per entry

use ruta_core::{Params, PathPattern, Resolution, ResolvedRoute, Resolver, RouteTable, Segment};

/// A resolver that walks the table in declaration order.
///
/// This is the default backend: it needs no extra dependencies and its scan
/// cost is negligible for hand-declared tables.
pub struct SegmentRouter {
    table: RouteTable,
}

impl SegmentRouter {
    /// Take ownership of a table for the lifetime of the router.
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// The underlying table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Release the table.
    pub fn into_table(self) -> RouteTable {
        self.table
    }
}

impl Resolver for SegmentRouter {
    fn resolve<'t, 'p>(&'t self, path: &'p str) -> Resolution<'t, 'p> {
        let pieces = path_pieces(path);
        for route in self.table.routes() {
            if let Some(params) = capture(route.entry().pattern(), &pieces) {
                #[cfg(feature = "tracing")]
                tracing::debug!(path, route = route.name(), "path resolved");
                return Resolution::Matched(ResolvedRoute {
                    name: route.name(),
                    page: route.entry().page(),
                    params,
                });
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(path, "no route matched, falling back");
        Resolution::Fallback(self.table.fallback())
    }
}

/// Split a navigated path into its non-empty pieces.
///
/// The query/fragment suffix is not part of the matched path, and empty
/// pieces vanish, which makes a single trailing slash insignificant.
fn path_pieces(path: &str) -> Vec<&str> {
    let path = match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    };
    path.split('/').filter(|piece| !piece.is_empty()).collect()
}

fn capture<'t, 'p>(pattern: &'t PathPattern, pieces: &[&'p str]) -> Option<Params<'t, 'p>> {
    let segments = pattern.segments();
    if segments.len() != pieces.len() {
        return None;
    }
    let mut params = Params::new();
    for (segment, piece) in segments.iter().zip(pieces) {
        match segment {
            Segment::Static(text) => {
                if text.as_str() != *piece {
                    return None;
                }
            }
            Segment::Param(name) => params.push(name.as_str(), *piece),
        }
    }
    Some(params)
}
