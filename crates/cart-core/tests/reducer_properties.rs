//! Property tests for the cart transition.

use std::collections::HashSet;

use proptest::prelude::*;

use cart_core::prelude::*;

fn catalog_item() -> impl Strategy<Value = CatalogItem> {
    // A small id range keeps collisions frequent.
    (1u64..=8).prop_map(|id| CatalogItem::new(id, format!("Item {id}"), format!("{}", id * 5)))
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => catalog_item().prop_map(Action::AddToCart),
        2 => catalog_item().prop_map(Action::RemoveFromCart),
        2 => catalog_item().prop_map(Action::IncrementQuantity),
        3 => catalog_item().prop_map(Action::DecrementQuantity),
        1 => Just(Action::ClearCart),
        1 => Just(Action::Unrecognized),
    ]
}

fn cart() -> impl Strategy<Value = Cart> {
    proptest::collection::vec(action(), 0..32)
        .prop_map(|actions| actions.iter().fold(Cart::new(), |c, a| transition(&c, a)))
}

fn ids(cart: &Cart) -> Vec<ItemId> {
    cart.iter().map(|l| l.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Clearing always yields the empty cart.
    #[test]
    fn property_clear_empties(cart in cart()) {
        prop_assert!(transition(&cart, &Action::ClearCart).is_empty());
    }

    /// PROPERTY: No action sequence produces two lines with the same id or a zero quantity.
    #[test]
    fn property_lines_unique_and_positive(actions in proptest::collection::vec(action(), 0..64)) {
        let mut store = CartStore::new();
        for action in actions {
            let cart = store.dispatch(action);
            let unique: HashSet<ItemId> = cart.iter().map(|l| l.id).collect();
            prop_assert_eq!(unique.len(), cart.len());
            prop_assert!(cart.iter().all(|l| l.quantity >= 1));
        }
    }

    /// PROPERTY: Actions never reorder the lines that survive them.
    #[test]
    fn property_relative_order_preserved(cart in cart(), action in action()) {
        let before = ids(&cart);
        let after = ids(&transition(&cart, &action));

        let kept: Vec<ItemId> = before.iter().copied().filter(|id| after.contains(id)).collect();
        let prefix: Vec<ItemId> = after.iter().copied().take(kept.len()).collect();
        prop_assert_eq!(kept, prefix);
    }

    /// PROPERTY: Increment never inserts a line.
    #[test]
    fn property_increment_never_inserts(cart in cart(), item in catalog_item()) {
        let next = transition(&cart, &Action::IncrementQuantity(item.clone()));
        prop_assert_eq!(next.len(), cart.len());
        if !cart.contains(item.id) {
            prop_assert_eq!(next, cart);
        }
    }

    /// PROPERTY: Add followed by decrement restores the original cart.
    #[test]
    fn property_add_then_decrement_restores(cart in cart(), item in catalog_item()) {
        let added = transition(&cart, &Action::AddToCart(item.clone()));
        let restored = transition(&added, &Action::DecrementQuantity(item));
        prop_assert_eq!(restored, cart);
    }

    /// PROPERTY: Unrecognized actions are identity.
    #[test]
    fn property_unrecognized_identity(cart in cart()) {
        prop_assert_eq!(transition(&cart, &Action::Unrecognized), cart);
    }
}
