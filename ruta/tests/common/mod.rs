use ruta::{RouteTable, route_table, testing::StubPage};

pub static NOT_FOUND: StubPage = StubPage::new("not_found");
pub static HOME: StubPage = StubPage::new("home");
pub static COLLECTION: StubPage = StubPage::new("collection");

/// The table every integration test resolves against: a fallback plus the
/// `home` and `collection` routes.
pub fn sample_table() -> RouteTable {
    route_table! {
        fallback: NOT_FOUND,
        home: "/" => HOME,
        collection: "/collections/:name" => COLLECTION,
    }
}
