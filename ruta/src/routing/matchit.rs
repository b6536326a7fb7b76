//! Matchit-based resolver.
//!
//! Radix-trie lookup for tables too large for an ordered scan. Parameter
//! segments are translated from the table's `:name` notation into matchit's
//! `{name}` syntax at construction time.

#[cfg(feature = "matchit")]
use crate::routing::RouterBuildError;
#[cfg(feature = "matchit")]
use matchit::{Match, Router as InnerRouter};
#[cfg(feature = "matchit")]
use ruta_core::{PathPattern, Resolution, ResolvedRoute, Resolver, RouteTable, Segment};

/// A resolver backed by a `matchit` radix trie.
#[cfg(feature = "matchit")]
pub struct MatchitRouter {
    table: RouteTable,
    inner: InnerRouter<usize>,
}

#[cfg(feature = "matchit")]
impl MatchitRouter {
    /// Build the trie over the table's entries.
    ///
    /// Duplicate route names are already refused by the table builder, but
    /// two routes may still declare overlapping patterns; matchit reports
    /// those as insert conflicts.
    pub fn new(table: RouteTable) -> Result<Self, RouterBuildError> {
        let mut inner = InnerRouter::new();
        for (index, route) in table.routes().iter().enumerate() {
            let translated = to_matchit(route.entry().pattern());
            inner
                .insert(translated, index)
                .map_err(|e| RouterBuildError::ConflictingPattern {
                    pattern: route.entry().pattern().as_str().to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(Self { table, inner })
    }

    /// The underlying table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}

#[cfg(feature = "matchit")]
impl Resolver for MatchitRouter {
    fn resolve<'t, 'p>(&'t self, path: &'p str) -> Resolution<'t, 'p> {
        match self.inner.at(normalize(path)) {
            Ok(Match { value, params }) => {
                let route = &self.table.routes()[*value];
                #[cfg(feature = "tracing")]
                tracing::debug!(path, route = route.name(), "path resolved");
                Resolution::Matched(ResolvedRoute {
                    name: route.name(),
                    page: route.entry().page(),
                    params: params.iter().collect(),
                })
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(path, "no route matched, falling back");
                Resolution::Fallback(self.table.fallback())
            }
        }
    }
}

/// Strip the query/fragment suffix and a single trailing slash, keeping the
/// same semantics as the segment backend.
#[cfg(feature = "matchit")]
fn normalize(path: &str) -> &str {
    let path = match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    };
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    if path.is_empty() { "/" } else { path }
}

#[cfg(feature = "matchit")]
fn to_matchit(pattern: &PathPattern) -> String {
    let mut translated = String::new();
    for segment in pattern.segments() {
        translated.push('/');
        match segment {
            Segment::Static(text) => translated.push_str(text),
            Segment::Param(name) => {
                translated.push('{');
                translated.push_str(name);
                translated.push('}');
            }
        }
    }
    if translated.is_empty() {
        translated.push('/');
    }
    translated
}

#[cfg(all(test, feature = "matchit"))]
mod tests {
    use super::{MatchitRouter, normalize};
    use crate::{routing::RouterBuildError, testing::StubPage};
    use ruta_core::{Resolver, RouteTable};

    static NOT_FOUND: StubPage = StubPage::new("not_found");
    static HOME: StubPage = StubPage::new("home");
    static COLLECTION: StubPage = StubPage::new("collection");

    fn router() -> MatchitRouter {
        let mut builder = RouteTable::builder().fallback(&NOT_FOUND);
        builder.route("home", "/", &HOME).unwrap();
        builder
            .route("collection", "/collections/:name", &COLLECTION)
            .unwrap();
        MatchitRouter::new(builder.build().unwrap()).unwrap()
    }

    #[test]
    fn test_matchit_resolution() {
        let router = router();

        assert_eq!(router.resolve("/").name(), Some("home"));

        let resolved = router.resolve("/collections/foo");
        assert_eq!(resolved.name(), Some("collection"));
        assert_eq!(resolved.params().unwrap().get("name"), Some("foo"));

        assert!(router.resolve("/nonexistent").is_fallback());
        assert_eq!(router.resolve("/collections/foo/").name(), Some("collection"));
    }

    #[test]
    fn test_conflicting_patterns_are_reported() {
        let mut builder = RouteTable::builder().fallback(&NOT_FOUND);
        builder.route("one", "/collections/:name", &COLLECTION).unwrap();
        builder.route("two", "/collections/:name", &COLLECTION).unwrap();

        let result = MatchitRouter::new(builder.build().unwrap());
        assert!(matches!(
            result,
            Err(RouterBuildError::ConflictingPattern { .. })
        ));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/collections/foo/"), "/collections/foo");
        assert_eq!(normalize("/collections/foo?sort=asc"), "/collections/foo");
        assert_eq!(normalize("/collections/foo#top"), "/collections/foo");
    }
}
