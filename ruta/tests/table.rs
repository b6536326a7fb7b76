use ruta::{RouteTable, TableError, route_table};

mod common;

#[test]
fn test_declared_table_shape() {
    let table = common::sample_table();

    assert_eq!(table.len(), 2);
    assert_eq!(table.fallback().name(), "not_found");

    let names: Vec<_> = table.routes().iter().map(|route| route.name()).collect();
    assert_eq!(names, ["home", "collection"]);

    assert_eq!(table.get("home").unwrap().pattern().as_str(), "/");
    let collection = table.get("collection").unwrap();
    assert_eq!(collection.pattern().as_str(), "/collections/:name");
    assert_eq!(collection.pattern().param_names().collect::<Vec<_>>(), ["name"]);
}

#[test]
fn test_builder_refuses_duplicate_names() {
    let mut builder = RouteTable::builder().fallback(&common::NOT_FOUND);
    builder.route("home", "/", &common::HOME).unwrap();
    let result = builder.route("home", "/again", &common::HOME);
    assert_eq!(result, Err(TableError::DuplicateName("home")));
}

#[test]
#[should_panic(expected = "invalid route")]
fn test_macro_panics_on_duplicate_names() {
    let _ = route_table! {
        fallback: common::NOT_FOUND,
        home: "/" => common::HOME,
        home: "/again" => common::HOME,
    };
}

#[test]
#[should_panic(expected = "invalid route")]
fn test_macro_panics_on_bad_pattern() {
    let _ = route_table! {
        fallback: common::NOT_FOUND,
        home: "no-slash" => common::HOME,
    };
}
