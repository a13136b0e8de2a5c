//! Session and view tests

use menu_catalog::NodeId;
use menu_engine::prelude::*;
use menu_test_utils::{
    demo_catalog, drink_catalog, ids, meal_catalog, raw_ids, setup_session,
    setup_session_with_allergens,
};
use pretty_assertions::assert_eq;

#[test]
fn test_session_edits_active_order_only() {
    let mut session = setup_session(demo_catalog());
    session.start_order(NodeId(100)).unwrap();
    session.start_order(NodeId(60)).unwrap();

    assert!(session.add(NodeId(63)).unwrap().is_applied());
    session.switch_active(1).unwrap();
    assert!(session.add(NodeId(102)).unwrap().is_applied());

    let orders: Vec<Vec<i64>> = session.cart().iter().map(raw_ids).collect();
    assert_eq!(orders, vec![vec![100, 102], vec![60, 61, 62, 63]]);
    assert_eq!(session.cart_total_price(), 700 + 425);
}

#[test]
fn test_session_multiple_operations() {
    let mut session = setup_session(meal_catalog());
    session.start_order(NodeId(1)).unwrap();

    let outcomes = session.add_multiple(&ids(&[52, 32])).unwrap();
    assert!(outcomes.iter().all(|m| m.is_applied()));
    assert_eq!(session.order_price(), Ok(899 + 50 + 100 + 50));

    let outcomes = session.remove_multiple(&ids(&[52, 32])).unwrap();
    assert_eq!(outcomes, vec![Mutation::Applied, Mutation::Applied]);
    // Side is mandatory, Fries comes back
    assert_eq!(
        raw_ids(session.active_order().unwrap()),
        vec![1, 10, 11, 40, 41, 50, 51, 30, 31]
    );
}

#[test]
fn test_removed_order_no_longer_accepts_edits() {
    let mut session = setup_session(drink_catalog());
    session.start_order(NodeId(100)).unwrap();
    session.remove_active_order().unwrap();

    assert_eq!(session.remove(NodeId(101)), Err(SessionError::NoActiveOrder));
    assert_eq!(session.print_cart(), "Cart is empty.");
    assert_eq!(session.cart_total_price(), 0);
}

#[test]
fn test_print_order_for_meal() {
    let mut session = setup_session(meal_catalog());
    session.start_order(NodeId(1)).unwrap();
    assert!(session.add(NodeId(42)).unwrap().is_applied());

    let expected = "\
-- Burger Meal (id 1) *selected*
  -- Main (id 10) *selected*
    -- Burger (id 11) *selected*
      -- Sauce (id 40) *selected*
        -- Chili Sauce (id 42) *selected*
      -- Extras (id 50) *selected*
        -- Cheese (id 51) *selected*
  -- Side (id 30) *selected*
    -- Fries (id 31) *selected*
Order Price: 969";
    assert_eq!(session.print_order(), expected);
}

#[test]
fn test_print_options_marks_counts() {
    let mut session = setup_session(drink_catalog());
    session.start_order(NodeId(100)).unwrap();

    let expected = "\
-- Drink (id 100) *selected*
  -- Cola (id 101) *selected*
  -- Lemonade (id 102)
";
    assert_eq!(session.print_order_options(), expected);
}

#[test]
fn test_print_cart_numbers_orders() {
    let mut session = setup_session(drink_catalog());
    session.start_order(NodeId(100)).unwrap();
    session.start_order(NodeId(100)).unwrap();
    assert!(session.add(NodeId(102)).unwrap().is_applied());

    let expected = "\
Order 1:
-- Drink (id 100) *selected*
  -- Cola (id 101) *selected*
Order Price: 500

Order 2:
-- Drink (id 100) *selected*
  -- Lemonade (id 102) *selected*
Order Price: 700

Cart Total Price: 1200
";
    assert_eq!(session.print_cart(), expected);
}

#[test]
fn test_menu_shared_between_sessions() {
    let menu = std::sync::Arc::new(Menu::new(drink_catalog()));
    let mut alice = Session::new(menu.clone());
    let mut bob = Session::new(menu);

    alice.start_order(NodeId(100)).unwrap();
    bob.start_order(NodeId(100)).unwrap();
    assert!(bob.add(NodeId(102)).unwrap().is_applied());

    assert_eq!(alice.order_price(), Ok(500));
    assert_eq!(bob.order_price(), Ok(700));
}

#[test]
fn test_order_allergens_follow_product_title() {
    let mut session = setup_session_with_allergens(demo_catalog());
    assert_eq!(session.order_allergens(), Err(SessionError::NoActiveOrder));

    session.start_order(NodeId(1)).unwrap();
    assert_eq!(
        session.order_allergens().unwrap().as_deref(),
        Some(
            "Product: Burger Meal\n\
             Main Allergens:\n  gluten: true\n  milk: false\n\
             \n\
             Sub-item Allergens:\n\
             \x20 Sub-item: Sesame bun\n    gluten: true\n    sesame: true\n\
             \x20 Sub-item: Cheddar\n    milk: true"
        )
    );

    // "Drink" shares no words with any allergen entry
    session.start_order(NodeId(100)).unwrap();
    assert_eq!(session.order_allergens(), Ok(None));

    let mut plain = setup_session(demo_catalog());
    plain.start_order(NodeId(1)).unwrap();
    assert_eq!(plain.order_allergens(), Ok(None));
}

#[test]
fn test_removing_product_leaves_empty_active_order() {
    let mut session = setup_session(drink_catalog());
    session.start_order(NodeId(100)).unwrap();

    assert!(session.remove(NodeId(100)).unwrap().is_applied());
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.order_price(), Ok(0));
    assert_eq!(session.print_order(), "No order, start one");
    assert_eq!(
        session.add(NodeId(101)),
        Ok(Mutation::Unchanged(NoChange::EmptyOrder))
    );
}
