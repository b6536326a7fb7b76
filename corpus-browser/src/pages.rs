//! Page descriptors for the browser UI.
//!
//! These are routing targets only; what each page renders is decided by the
//! UI layer that receives it from the resolver.

use ruta::Page;

/// Landing page listing every collection.
#[derive(Debug, Clone, Copy)]
pub struct Home;

/// Documents of a single collection, addressed by collection name.
#[derive(Debug, Clone, Copy)]
pub struct Collection;

/// Shown when no route matches the navigated path.
#[derive(Debug, Clone, Copy)]
pub struct NotFound;

impl Page for Home {
    fn name(&self) -> &'static str {
        "Home"
    }
}

impl Page for Collection {
    fn name(&self) -> &'static str {
        "Collection"
    }
}

impl Page for NotFound {
    fn name(&self) -> &'static str {
        "NotFound"
    }
}

/// Shared instance referenced by the route table.
pub static HOME: Home = Home;
/// Shared instance referenced by the route table.
pub static COLLECTION: Collection = Collection;
/// Shared instance referenced by the route table.
pub static NOT_FOUND: NotFound = NotFound;
