use menu_catalog::{
    AllergenLoadError, AllergenTable, Catalog, CatalogLoadError, Node, NodeId, Role,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Write;

const MEAL: &str = r#"{
    "Refs": {
        "100": { "Id": 100, "Title": "Meal", "Price": 900,
                 "Tags": ["configurationtype:mandatory"] },
        "200": { "Title": "Side", "Tags": ["configurationtype:mandatory"] },
        "201": { "Title": "Fries", "Price": 0 },
        "202": { "Title": "Salad", "Price": 150 },
        "300": { "Title": "Sauces", "Tags": ["configurationtype:multiselect"],
                 "Selections": { "Min": 0, "Max": 2 } },
        "301": { "Title": "Ketchup", "Price": 20, "Description": "Tomato" }
    },
    "Products": [
        { "Id": 100, "Configurables": [
            { "Id": 200, "Choices": [
                { "Id": 201, "IsDefault": true, "Checked": true,
                  "Configurables": [ { "Id": 300, "Choices": [ { "Id": 301 } ] } ] },
                { "Id": 202,
                  "Configurables": [ { "Id": 300, "Choices": [ { "Id": 301 } ] } ] }
            ] }
        ] }
    ]
}"#;

#[test]
fn test_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MEAL.as_bytes()).unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.products().count(), 1);
    assert_eq!(catalog.references().count(), 6);

    let sauces = catalog.reference(NodeId(300)).unwrap();
    assert!(sauces.policy.is_multiselect());
    assert!(!sauces.policy.is_mandatory());
    assert_eq!(sauces.max_selections(), Some(2));
}

#[test]
fn test_shared_subtree_has_two_parents() {
    let catalog = Catalog::from_json_str(MEAL).unwrap();
    let ancestry = catalog.ancestry();

    assert_eq!(ancestry.parents_of(NodeId(300)), vec![NodeId(201), NodeId(202)]);
    assert_eq!(ancestry.parents_of(NodeId(301)), vec![NodeId(300)]);
    assert!(ancestry.parents_of(NodeId(100)).is_empty());
}

#[test]
fn test_malformed_source_is_fatal() {
    let err = Catalog::from_json_str(r#"{ "Refs": {}, "Products": [ { "Title": "no id" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, CatalogLoadError::Json(_)));
}

#[test]
fn test_titles_skip_untitled_references() {
    let catalog = Catalog::from_json_str(
        r#"{ "Refs": { "1": { "Title": "A" }, "2": {} }, "Products": [] }"#,
    )
    .unwrap();
    let titles: Vec<_> = catalog.titles().collect();
    assert_eq!(titles, vec![(NodeId(1), "A")]);
}

#[test]
fn test_allergens_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "sub_items": { "Fries": { "allergens": { "gluten": false }, "ingredients": "potato, oil" } },
            "products": [ { "name": "Meal", "allergens": { "gluten": true }, "sub_items": ["Fries"] } ]
        }"#,
    )
    .unwrap();

    let table = AllergenTable::from_path(file.path()).unwrap();
    assert_eq!(table.products().count(), 1);
    assert_eq!(table.allergens("MEAL").map(|f| f["gluten"]), Some(true));
    assert_eq!(table.ingredients("Fries"), Some("potato, oil"));

    let err = AllergenTable::from_path("/no/such/allergens.json").unwrap_err();
    assert!(matches!(err, AllergenLoadError::Io { .. }));
}

fn chain(ids: &[i64]) -> Node {
    let mut iter = ids.iter().rev();
    let mut node = Node::new(*iter.next().unwrap());
    for id in iter {
        node = Node::new(*id).with_child(Role::Items, node);
    }
    node
}

proptest! {
    #[test]
    fn prop_all_sub_ids_contains_root_even_with_id_cycles(
        ids in proptest::collection::vec(1..6i64, 1..12)
    ) {
        // Small id range forces repeated ids along the chain
        let product = chain(&ids);
        let root = product.id;
        let catalog = Catalog::new(vec![product], []).unwrap();

        let all = catalog.all_sub_ids(root);
        prop_assert!(all.contains(&root));
        prop_assert!(all.len() <= ids.len());
    }
}
