//! Testing utilities for Ruta.
//!
//! - [`StubPage`]: a named placeholder page for declaring tables in tests
//!   without a real UI layer.

use ruta_core::Page;

/// A placeholder page identified only by its name.
///
/// # Example
///
/// ```rust,ignore
/// static HOME: StubPage = StubPage::new("home");
///
/// let mut builder = RouteTable::builder().fallback(&NOT_FOUND);
/// builder.route("home", "/", &HOME)?;
/// ```
pub struct StubPage {
    name: &'static str,
}

impl StubPage {
    /// Create a stub with the given diagnostic name.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Page for StubPage {
    fn name(&self) -> &'static str {
        self.name
    }
}
