//! Declarative route-table construction.

/// Declare a [`RouteTable`](crate::RouteTable) as a data literal.
///
/// The `fallback` row names the page selected when nothing matches; each
/// following row maps a logical route name to a path pattern and the page
/// it addresses. Rows keep their declaration order in the finished table.
///
/// # Example
///
/// ```rust,ignore
/// use ruta::route_table;
///
/// let table = route_table! {
///     fallback: NOT_FOUND,
///     home: "/" => HOME,
///     collection: "/collections/:name" => COLLECTION,
/// };
/// ```
///
/// # Panics
///
/// Panics when the declaration is invalid (duplicate route name, malformed
/// pattern). A declared table is part of the program text, so this is a
/// programming error rather than a runtime condition; use
/// [`RouteTableBuilder`](crate::RouteTableBuilder) directly to handle the
/// errors instead.
#[macro_export]
macro_rules! route_table {
    (
        fallback: $fallback:expr,
        $($name:ident : $path:literal => $page:expr),+ $(,)?
    ) => {{
        let mut builder = $crate::RouteTable::builder().fallback(&$fallback);
        $(
            if let Err(error) = builder.route(stringify!($name), $path, &$page) {
                panic!("invalid route `{}`: {}", stringify!($name), error);
            }
        )+
        match builder.build() {
            Ok(table) => table,
            Err(error) => panic!("invalid route table: {}", error),
        }
    }};
}
