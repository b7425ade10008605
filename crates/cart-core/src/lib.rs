//! Shopping cart domain types and state transitions.
//!
//! This crate provides the pieces of a client-side cart widget that carry
//! actual behaviour:
//!
//! - **Catalog**: the fixed, read-only list of purchasable items
//! - **Cart**: ordered, id-unique line items with quantities
//! - **Action**: user intents, with a JSON wire form and a command shorthand
//! - **Reducer**: the pure `(cart, action) -> cart` transition
//! - **Store**: the mutable cell holding the current cart, with observers
//!
//! # Example
//!
//! ```rust
//! use cart_core::prelude::*;
//!
//! let catalog = Catalog::reference();
//! let laptop = catalog.get(ItemId::new(1)).unwrap().clone();
//!
//! let mut store = CartStore::new();
//! store.dispatch(Action::AddToCart(laptop.clone()));
//! store.dispatch(Action::IncrementQuantity(laptop));
//!
//! assert_eq!(store.state().item_count(), 2);
//! ```

pub mod error;
pub mod ids;

pub mod action;
pub mod cart;
pub mod catalog;
pub mod reducer;
pub mod store;

pub use error::CartError;
pub use ids::ItemId;
pub use reducer::transition;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::{Action, ActionCommand, ActionKind};
    pub use crate::cart::{Cart, CartLine};
    pub use crate::catalog::{Catalog, CatalogItem};
    pub use crate::error::CartError;
    pub use crate::ids::ItemId;
    pub use crate::reducer::transition;
    pub use crate::store::{CartObserver, CartStore, Dispatch};
}
