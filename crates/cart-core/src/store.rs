//! The cell holding the current cart.
//!
//! [`CartStore`] is the dispatch interface a UI layer talks to: it runs
//! every action through [`transition`], publishes the result as the new
//! current cart, and then tells its observers (the re-render side).
//!
//! Dispatch takes `&mut self`, so one action is fully applied and published
//! before the next can be read.

use std::fmt;

use crate::action::Action;
use crate::cart::Cart;
use crate::reducer::transition;

/// One completed dispatch, as seen by observers.
#[derive(Debug, Clone, Copy)]
pub struct Dispatch<'a> {
    /// 1-based position of this dispatch in the store's history.
    pub sequence: u64,
    /// The action that was applied.
    pub action: &'a Action,
    /// Cart before the action.
    pub previous: &'a Cart,
    /// Cart after the action, now the store's current state.
    pub current: &'a Cart,
}

impl Dispatch<'_> {
    /// Whether the action changed the cart.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Something that reacts to published carts, e.g. a renderer or a logger.
pub trait CartObserver {
    /// Called after each dispatch, once the new cart is published.
    fn on_dispatch(&self, dispatch: &Dispatch<'_>);
}

impl<F> CartObserver for F
where
    F: Fn(&Dispatch<'_>),
{
    fn on_dispatch(&self, dispatch: &Dispatch<'_>) {
        self(dispatch)
    }
}

/// Owner of the current cart.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    observers: Vec<Box<dyn CartObserver>>,
    dispatched: u64,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting from an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    /// Register an observer. Observers run in registration order.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register a closure as an observer.
    pub fn subscribe_fn<F>(&mut self, f: F)
    where
        F: Fn(&Dispatch<'_>) + 'static,
    {
        self.subscribe(f);
    }

    /// The current cart.
    pub fn state(&self) -> &Cart {
        &self.cart
    }

    /// Apply an action and publish the resulting cart.
    pub fn dispatch(&mut self, action: Action) -> &Cart {
        let next = transition(&self.cart, &action);
        let previous = std::mem::replace(&mut self.cart, next);
        self.dispatched += 1;

        let dispatch = Dispatch {
            sequence: self.dispatched,
            action: &action,
            previous: &previous,
            current: &self.cart,
        };
        for observer in &self.observers {
            observer.on_dispatch(&dispatch);
        }

        &self.cart
    }

    /// Apply actions in order, one at a time.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &Cart {
        for action in actions {
            self.dispatch(action);
        }
        &self.cart
    }

    /// Number of actions dispatched so far.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatched
    }

    /// Consume the store, returning the current cart.
    pub fn into_state(self) -> Cart {
        self.cart
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .field("dispatched", &self.dispatched)
            .finish()
    }
}
