//! Route entries and the route table.

use crate::{error::TableError, page::Page, pattern::PathPattern};

/// A path pattern paired with the page it addresses.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: PathPattern,
    page: &'static dyn Page,
}

impl RouteEntry {
    /// Create an entry from a parsed pattern and a page reference.
    pub fn new(pattern: PathPattern, page: &'static dyn Page) -> Self {
        Self { pattern, page }
    }

    /// The entry's path pattern.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The page the entry addresses.
    pub fn page(&self) -> &'static dyn Page {
        self.page
    }
}

/// A route entry together with its logical name.
#[derive(Debug, Clone)]
pub struct NamedRoute {
    name: &'static str,
    entry: RouteEntry,
}

impl NamedRoute {
    /// The route's logical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The route's entry.
    pub fn entry(&self) -> &RouteEntry {
        &self.entry
    }
}

/// The static path-to-page mapping.
///
/// One fallback page reference followed by the named routes in declaration
/// order. Constructed once at application startup via
/// [`RouteTableBuilder`] (or the `route_table!` macro in `ruta`), immutable
/// thereafter, and read by the navigating resolver on every navigation
/// event.
#[derive(Debug, Clone)]
pub struct RouteTable {
    fallback: &'static dyn Page,
    routes: Vec<NamedRoute>,
}

impl RouteTable {
    /// Start building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// The page selected when no pattern matches.
    pub fn fallback(&self) -> &'static dyn Page {
        self.fallback
    }

    /// Look up a route by its logical name.
    ///
    /// Tables are declared by hand and tiny, so this is a linear scan.
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .map(|route| &route.entry)
    }

    /// The named routes, in declaration order.
    pub fn routes(&self) -> &[NamedRoute] {
        &self.routes
    }

    /// The number of named routes (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no named routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for [`RouteTable`].
///
/// Refuses duplicate route names and unparsable patterns at build time;
/// the finished table cannot hold a malformed entry. The fallback carries
/// no name and no pattern, so it is registered separately.
pub struct RouteTableBuilder {
    fallback: Option<&'static dyn Page>,
    routes: Vec<NamedRoute>,
}

impl Default for RouteTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            fallback: None,
            routes: Vec::new(),
        }
    }

    /// Set the page selected when no pattern matches.
    pub fn fallback(mut self, page: &'static dyn Page) -> Self {
        self.fallback = Some(page);
        self
    }

    /// Register a named route.
    ///
    /// Returns an error if `name` is already taken or `pattern` does not
    /// parse.
    pub fn route(
        &mut self,
        name: &'static str,
        pattern: &str,
        page: &'static dyn Page,
    ) -> Result<(), TableError> {
        if self.routes.iter().any(|route| route.name == name) {
            return Err(TableError::DuplicateName(name));
        }
        let pattern = PathPattern::parse(pattern)?;
        self.routes.push(NamedRoute {
            name,
            entry: RouteEntry::new(pattern, page),
        });
        Ok(())
    }

    /// Build the table, consuming the builder.
    ///
    /// Returns an error if no fallback page was set.
    pub fn build(self) -> Result<RouteTable, TableError> {
        let fallback = self.fallback.ok_or(TableError::MissingFallback)?;
        Ok(RouteTable {
            fallback,
            routes: self.routes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteTable, TableError};
    use crate::page::Page;

    struct Stub(&'static str);

    impl Page for Stub {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    static NOT_FOUND: Stub = Stub("not_found");
    static HOME: Stub = Stub("home");
    static COLLECTION: Stub = Stub("collection");

    #[test]
    fn test_build_preserves_declaration_order() {
        let mut builder = RouteTable::builder().fallback(&NOT_FOUND);
        builder.route("home", "/", &HOME).unwrap();
        builder
            .route("collection", "/collections/:name", &COLLECTION)
            .unwrap();
        let table = builder.build().unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.fallback().name(), "not_found");
        let names: Vec<_> = table.routes().iter().map(|route| route.name()).collect();
        assert_eq!(names, ["home", "collection"]);
        assert_eq!(table.get("home").unwrap().pattern().as_str(), "/");
        assert!(table.get("unknown").is_none());
    }

    #[test]
    fn test_duplicate_name_is_refused() {
        let mut builder = RouteTable::builder().fallback(&NOT_FOUND);
        builder.route("home", "/", &HOME).unwrap();
        let result = builder.route("home", "/elsewhere", &HOME);
        assert_eq!(result, Err(TableError::DuplicateName("home")));
    }

    #[test]
    fn test_missing_fallback_is_refused() {
        let mut builder = RouteTable::builder();
        builder.route("home", "/", &HOME).unwrap();
        assert!(matches!(
            builder.build(),
            Err(TableError::MissingFallback)
        ));
    }

    #[test]
    fn test_bad_pattern_is_refused() {
        let mut builder = RouteTable::builder().fallback(&NOT_FOUND);
        let result = builder.route("broken", "no-slash", &HOME);
        assert!(matches!(result, Err(TableError::Pattern(_))));
    }
}
