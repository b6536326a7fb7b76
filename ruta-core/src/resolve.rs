//! The resolution contract between the table and its consumer.
//!
//! A [`Resolver`] is the navigating collaborator: it reads the route table
//! on every navigation event, selects an entry for the current path and
//! binds any named parameter segments. The table itself stays pure data;
//! everything here is about consuming it.

use crate::{page::Page, params::Params};

/// A successfully matched named route.
#[derive(Debug, Clone)]
pub struct ResolvedRoute<'t, 'p> {
    /// Logical name of the matched route.
    pub name: &'static str,
    /// The page the route addresses.
    pub page: &'static dyn Page,
    /// Parameters bound from the path, in pattern order.
    pub params: Params<'t, 'p>,
}

/// Outcome of resolving a navigated path against the table.
///
/// Resolution is total: when no pattern matches, the table's fallback page
/// applies, so there is no error case.
#[derive(Debug, Clone)]
pub enum Resolution<'t, 'p> {
    /// A named route matched.
    Matched(ResolvedRoute<'t, 'p>),
    /// No pattern matched; the fallback page applies.
    Fallback(&'static dyn Page),
}

impl<'t, 'p> Resolution<'t, 'p> {
    /// Returns true if a named route matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    /// Returns true if the fallback page applies.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }

    /// The page to show, whichever variant applies.
    pub fn page(&self) -> &'static dyn Page {
        match self {
            Resolution::Matched(route) => route.page,
            Resolution::Fallback(page) => *page,
        }
    }

    /// The matched route's name, if any.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Resolution::Matched(route) => Some(route.name),
            Resolution::Fallback(_) => None,
        }
    }

    /// The bound parameters, if a named route matched.
    pub fn params(&self) -> Option<&Params<'t, 'p>> {
        match self {
            Resolution::Matched(route) => Some(&route.params),
            Resolution::Fallback(_) => None,
        }
    }

    /// The matched route, if any.
    pub fn matched(self) -> Option<ResolvedRoute<'t, 'p>> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::Fallback(_) => None,
        }
    }
}

/// Selects a page for every navigated path.
///
/// Implementations read an immutable [`RouteTable`](crate::RouteTable)
/// synchronously; there is no shared mutable state and no suspension.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve navigation paths",
    label = "missing `Resolver` implementation",
    note = "Implement `Resolver` to select pages for navigated paths."
)]
pub trait Resolver: Send + Sync {
    /// Resolve `path` to a table entry, binding named parameters.
    fn resolve<'t, 'p>(&'t self, path: &'p str) -> Resolution<'t, 'p>;
}

#[cfg(test)]
mod tests {
    use super::{Resolution, ResolvedRoute};
    use crate::{page::Page, params::Params};

    struct Stub(&'static str);

    impl Page for Stub {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    static HOME: Stub = Stub("home");
    static NOT_FOUND: Stub = Stub("not_found");

    #[test]
    fn test_resolution_helpers() {
        let mut params = Params::new();
        params.push("name", "foo");
        let matched = Resolution::Matched(ResolvedRoute {
            name: "collection",
            page: &HOME,
            params,
        });
        let fallback: Resolution = Resolution::Fallback(&NOT_FOUND);

        assert!(matched.is_matched());
        assert!(!matched.is_fallback());
        assert_eq!(matched.name(), Some("collection"));
        assert_eq!(matched.page().name(), "home");
        assert_eq!(matched.params().and_then(|p| p.get("name")), Some("foo"));

        assert!(fallback.is_fallback());
        assert_eq!(fallback.name(), None);
        assert!(fallback.params().is_none());
        assert_eq!(fallback.page().name(), "not_found");
        assert!(fallback.matched().is_none());
    }
}
