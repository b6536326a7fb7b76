//! The application route table.

use crate::pages::{COLLECTION, HOME, NOT_FOUND};
use ruta::{RouteTable, route_table};

/// Build the browser's route table.
///
/// Called once at startup; the table is immutable afterwards and is read by
/// the navigating resolver on every navigation event.
pub fn routes() -> RouteTable {
    route_table! {
        fallback: NOT_FOUND,
        home: "/" => HOME,
        collection: "/collections/:name" => COLLECTION,
    }
}
