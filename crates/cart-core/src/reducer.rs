//! The cart state transition.

use crate::action::Action;
use crate::cart::{Cart, CartLine};
use crate::ids::ItemId;

/// Compute the next cart from the current cart and an action.
///
/// Pure and total: every action, including ones naming ids that are not in
/// the cart, produces a cart. Lines are matched by id only and keep their
/// position; quantities saturate instead of overflowing.
pub fn transition(cart: &Cart, action: &Action) -> Cart {
    match action {
        Action::AddToCart(item) => {
            if cart.contains(item.id) {
                increment(cart, item.id)
            } else {
                let mut lines = cart.lines().to_vec();
                lines.push(CartLine::new(item, 1));
                Cart::from_vec_unchecked(lines)
            }
        }
        Action::RemoveFromCart(item) => {
            let lines = cart.iter().filter(|l| l.id != item.id).cloned().collect();
            Cart::from_vec_unchecked(lines)
        }
        Action::IncrementQuantity(item) => increment(cart, item.id),
        Action::DecrementQuantity(item) => {
            let lines = cart
                .iter()
                .cloned()
                .map(|mut line| {
                    if line.id == item.id {
                        line.quantity = line.quantity.saturating_sub(1);
                    }
                    line
                })
                .filter(|line| line.quantity > 0)
                .collect();
            Cart::from_vec_unchecked(lines)
        }
        Action::ClearCart => Cart::new(),
        Action::Unrecognized => cart.clone(),
    }
}

fn increment(cart: &Cart, id: ItemId) -> Cart {
    let lines = cart
        .iter()
        .map(|line| {
            if line.id == id {
                CartLine {
                    quantity: line.quantity.saturating_add(1),
                    ..line.clone()
                }
            } else {
                line.clone()
            }
        })
        .collect();
    Cart::from_vec_unchecked(lines)
}
