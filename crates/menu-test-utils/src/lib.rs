//! Testing utilities for the menu explorer workspace
//!
//! Shared catalog fixtures, built through the real JSON loader.

#![allow(missing_docs)]

use menu_catalog::{AllergenTable, Catalog, NodeId};
use menu_engine::{ExplorerConfig, Menu, Order, Session};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Product 100 "Drink": mandatory single-select between 101 (default, 500)
/// and 102 (700)
pub fn drink_document() -> Value {
    json!({
        "Refs": {
            "100": { "Title": "Drink", "Tags": ["configurationtype:mandatory"] },
            "101": { "Title": "Cola", "Price": 500 },
            "102": { "Title": "Lemonade", "Price": 700 }
        },
        "Products": [ { "Id": 100, "Choices": [
            { "Id": 101, "IsDefault": true, "Checked": true },
            { "Id": 102 }
        ] } ]
    })
}

/// Product 1 "Burger Meal" (899)
///
/// ```text
/// 1 Items
///   10 Main (mandatory) Choices
///     11 Burger* Configurables
///       40 Sauce (mandatory) Choices 41 BBQ*, 42 Chili (20)
///       50 Extras (multiselect, max 3) Choices 51 Cheese* (50), 52 Bacon (100), 53 Pickles (30), 54 Onions
///     12 Wrap (100) Configurables
///       40 Sauce (shared with Burger)
///   30 Side (mandatory) Choices 31 Fries*, 32 Salad (50)
/// ```
/// `*` marks default-and-checked. Sauce 40 has two parents.
pub fn meal_document() -> Value {
    let sauce = json!({ "Id": 40, "Choices": [
        { "Id": 41, "IsDefault": true, "Checked": true },
        { "Id": 42 }
    ] });

    json!({
        "Refs": {
            "1": { "Title": "Burger Meal", "Price": 899 },
            "10": { "Title": "Main", "Tags": ["configurationtype:mandatory"] },
            "11": { "Title": "Burger" },
            "12": { "Title": "Wrap", "Price": 100 },
            "30": { "Title": "Side", "Tags": ["configurationtype:mandatory"] },
            "31": { "Title": "Fries" },
            "32": { "Title": "Salad", "Price": 50 },
            "40": { "Title": "Sauce", "Tags": ["configurationtype:mandatory"] },
            "41": { "Title": "BBQ Sauce" },
            "42": { "Title": "Chili Sauce", "Price": 20 },
            "50": {
                "Title": "Extras",
                "Tags": ["configurationtype:multiselect"],
                "Selections": { "Min": 0, "Max": 3 }
            },
            "51": { "Title": "Cheese", "Price": 50 },
            "52": { "Title": "Bacon", "Price": 100 },
            "53": { "Title": "Pickles", "Price": 30 },
            "54": { "Title": "Onions" }
        },
        "Products": [ { "Id": 1, "Items": [
            { "Id": 10, "IsDefault": true, "Checked": true, "Choices": [
                { "Id": 11, "IsDefault": true, "Checked": true, "Configurables": [
                    sauce.clone(),
                    { "Id": 50, "Choices": [
                        { "Id": 51, "IsDefault": true, "Checked": true },
                        { "Id": 52 },
                        { "Id": 53 },
                        { "Id": 54 }
                    ] }
                ] },
                { "Id": 12, "Configurables": [ sauce ] }
            ] },
            { "Id": 30, "IsDefault": true, "Checked": true, "Choices": [
                { "Id": 31, "IsDefault": true, "Checked": true },
                { "Id": 32 }
            ] }
        ] } ]
    })
}

/// Product 60 "Nuggets" (400) with optional multiselect 61 "Dips" (max 3):
/// 62 Ketchup* (10), 63 Mustard (15), 999 Napkin
pub fn dips_document() -> Value {
    json!({
        "Refs": {
            "60": { "Title": "Nuggets", "Price": 400 },
            "61": {
                "Title": "Dips",
                "Tags": ["configurationtype:multiselect"],
                "Selections": { "Max": 3 }
            },
            "62": { "Title": "Ketchup", "Price": 10 },
            "63": { "Title": "Mustard", "Price": 15 },
            "999": { "Title": "Napkin" }
        },
        "Products": [ { "Id": 60, "Configurables": [
            { "Id": 61, "Choices": [
                { "Id": 62, "IsDefault": true, "Checked": true },
                { "Id": 63 },
                { "Id": 999 }
            ] }
        ] } ]
    })
}

/// Merge catalog documents; later refs win on key collisions
pub fn merge_documents(docs: impl IntoIterator<Item = Value>) -> Value {
    let mut refs = Map::new();
    let mut products = Vec::new();
    for mut doc in docs {
        if let Some(Value::Object(r)) = doc.get_mut("Refs").map(Value::take) {
            refs.extend(r);
        }
        if let Some(Value::Array(p)) = doc.get_mut("Products").map(Value::take) {
            products.extend(p);
        }
    }
    json!({ "Refs": refs, "Products": products })
}

/// Every fixture product in one catalog document
pub fn demo_document() -> Value {
    merge_documents([meal_document(), dips_document(), drink_document()])
}

pub fn drink_catalog() -> Catalog {
    Catalog::from_value(drink_document()).unwrap()
}

pub fn meal_catalog() -> Catalog {
    Catalog::from_value(meal_document()).unwrap()
}

pub fn dips_catalog() -> Catalog {
    Catalog::from_value(dips_document()).unwrap()
}

pub fn demo_catalog() -> Catalog {
    Catalog::from_value(demo_document()).unwrap()
}

/// Allergen data naming the "Burger Meal" product and two of its sub-items
pub fn allergen_document() -> Value {
    json!({
        "sub_items": {
            "Sesame bun": {
                "allergens": { "gluten": true, "sesame": true },
                "ingredients": "wheat flour, sesame seeds"
            },
            "Cheddar": { "allergens": { "milk": true }, "ingredients": "milk, salt" }
        },
        "products": [ {
            "name": "Burger Meal",
            "allergens": { "gluten": true, "milk": false },
            "sub_items": ["Sesame bun", "Cheddar"]
        } ]
    })
}

pub fn allergen_table() -> AllergenTable {
    AllergenTable::from_value(allergen_document()).unwrap()
}

pub fn setup_menu(catalog: Catalog) -> Menu {
    Menu::new(catalog)
}

pub fn setup_menu_with_config(catalog: Catalog, config: ExplorerConfig) -> Menu {
    Menu::with_config(catalog, config)
}

pub fn setup_session(catalog: Catalog) -> Session {
    Session::new(Arc::new(setup_menu(catalog)))
}

pub fn setup_session_with_allergens(catalog: Catalog) -> Session {
    Session::new(Arc::new(setup_menu(catalog).with_allergens(allergen_table())))
}

pub fn ids(raw: &[i64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

pub fn raw_ids(order: &Order) -> Vec<i64> {
    order.ids().iter().map(|id| id.get()).collect()
}
