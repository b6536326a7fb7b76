//! Page trait for route targets.

use std::fmt;

/// A unit of renderable UI addressed by the route table.
///
/// The table never owns its pages: entries hold `&'static dyn Page`
/// references to descriptors owned elsewhere. Rendering, lifecycle and
/// navigation history all belong to the consumer reading the table; a
/// `Page` only needs to be shareable and to identify itself.
///
/// # Example
///
/// ```rust,ignore
/// struct Home;
///
/// impl Page for Home {
///     fn name(&self) -> &'static str {
///         "Home"
///     }
/// }
///
/// static HOME: Home = Home;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Page",
    label = "must be `Send + Sync`",
    note = "Route targets are shared with the navigating consumer and must be thread-safe."
)]
pub trait Page: Send + Sync {
    /// Stable identifier used for diagnostics and assertions.
    fn name(&self) -> &'static str;
}

impl<P: Page + ?Sized> Page for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<'a> fmt::Debug for (dyn Page + 'a) {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Page").field(&self.name()).finish()
    }
}
