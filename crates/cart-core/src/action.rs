//! Cart actions: the user intents consumed by the reducer.
//!
//! Actions travel as JSON in the form `{"type": "ADD_TO_CART", "item": {...}}`.
//! Tags the decoder does not know become [`Action::Unrecognized`], which the
//! reducer treats as identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogItem};
use crate::error::CartError;
use crate::ids::ItemId;

/// A discrete user intent.
///
/// Only the item's `id` is used for matching. `AddToCart` on a new item
/// copies every field of the payload into the new line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireAction", into = "WireAction")]
pub enum Action {
    /// Add one unit, appending a line if the item is not in the cart.
    AddToCart(CatalogItem),
    /// Drop the item's line whatever its quantity.
    RemoveFromCart(CatalogItem),
    /// Add one unit to an existing line.
    IncrementQuantity(CatalogItem),
    /// Take one unit off an existing line, dropping it at zero.
    DecrementQuantity(CatalogItem),
    /// Empty the cart.
    ClearCart,
    /// An action tag nobody handles.
    Unrecognized,
}

impl Action {
    /// The kind of action, without its payload.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AddToCart(_) => ActionKind::AddToCart,
            Action::RemoveFromCart(_) => ActionKind::RemoveFromCart,
            Action::IncrementQuantity(_) => ActionKind::IncrementQuantity,
            Action::DecrementQuantity(_) => ActionKind::DecrementQuantity,
            Action::ClearCart => ActionKind::ClearCart,
            Action::Unrecognized => ActionKind::Unrecognized,
        }
    }

    /// The payload item, if the action carries one.
    pub fn item(&self) -> Option<&CatalogItem> {
        match self {
            Action::AddToCart(item)
            | Action::RemoveFromCart(item)
            | Action::IncrementQuantity(item)
            | Action::DecrementQuantity(item) => Some(item),
            Action::ClearCart | Action::Unrecognized => None,
        }
    }

    /// The payload item's id, if the action carries one.
    pub fn item_id(&self) -> Option<ItemId> {
        self.item().map(|i| i.id)
    }
}

/// Action tag without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    AddToCart,
    RemoveFromCart,
    IncrementQuantity,
    DecrementQuantity,
    ClearCart,
    Unrecognized,
}

impl ActionKind {
    /// The wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::AddToCart => "ADD_TO_CART",
            ActionKind::RemoveFromCart => "REMOVE_FROM_CART",
            ActionKind::IncrementQuantity => "INCREMENT_QUANTITY",
            ActionKind::DecrementQuantity => "DECREMENT_QUANTITY",
            ActionKind::ClearCart => "CLEAR_CART",
            ActionKind::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum WireAction {
    #[serde(alias = "ADD_TO_CART1")]
    AddToCart {
        item: CatalogItem,
    },
    RemoveFromCart {
        item: CatalogItem,
    },
    IncrementQuantity {
        item: CatalogItem,
    },
    DecrementQuantity {
        item: CatalogItem,
    },
    ClearCart,
    #[serde(other)]
    Unrecognized,
}

impl From<WireAction> for Action {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::AddToCart { item } => Action::AddToCart(item),
            WireAction::RemoveFromCart { item } => Action::RemoveFromCart(item),
            WireAction::IncrementQuantity { item } => Action::IncrementQuantity(item),
            WireAction::DecrementQuantity { item } => Action::DecrementQuantity(item),
            WireAction::ClearCart => Action::ClearCart,
            WireAction::Unrecognized => Action::Unrecognized,
        }
    }
}

impl From<Action> for WireAction {
    fn from(action: Action) -> Self {
        match action {
            Action::AddToCart(item) => WireAction::AddToCart { item },
            Action::RemoveFromCart(item) => WireAction::RemoveFromCart { item },
            Action::IncrementQuantity(item) => WireAction::IncrementQuantity { item },
            Action::DecrementQuantity(item) => WireAction::DecrementQuantity { item },
            Action::ClearCart => WireAction::ClearCart,
            Action::Unrecognized => WireAction::Unrecognized,
        }
    }
}

/// Id-level action shorthand, e.g. `add 3`, `dec:3` or `clear`.
///
/// Commands name items by id only; [`ActionCommand::resolve`] looks the
/// item up in a catalog to build the full [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCommand {
    Add(ItemId),
    Remove(ItemId),
    Increment(ItemId),
    Decrement(ItemId),
    Clear,
}

impl ActionCommand {
    /// Parse a command such as `add 3`, `add:3`, `rm 3`, `+ 3`, `+3` or `clear`.
    pub fn parse(input: &str) -> Result<Self, CartError> {
        let mut parts: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ':')
            .filter(|p| !p.is_empty())
            .collect();

        // `+3` and `-3` carry the id in the same token as the sign.
        if let Some(first) = parts.first().copied() {
            if first.len() > 1 && (first.starts_with('+') || first.starts_with('-')) {
                parts[0] = &first[1..];
                parts.insert(0, &first[..1]);
            }
        }

        let (verb, arg) = match parts.as_slice() {
            [verb] => (verb.to_lowercase(), None),
            [verb, arg] => (verb.to_lowercase(), Some(*arg)),
            _ => return Err(CartError::InvalidCommand(input.to_string())),
        };

        let id = || -> Result<ItemId, CartError> {
            arg.ok_or_else(|| CartError::InvalidCommand(format!("{input}: missing item id")))?
                .parse()
        };

        match verb.as_str() {
            "add" | "a" => Ok(ActionCommand::Add(id()?)),
            "remove" | "rm" => Ok(ActionCommand::Remove(id()?)),
            "inc" | "increment" | "+" => Ok(ActionCommand::Increment(id()?)),
            "dec" | "decrement" | "-" => Ok(ActionCommand::Decrement(id()?)),
            "clear" if arg.is_none() => Ok(ActionCommand::Clear),
            _ => Err(CartError::InvalidCommand(input.to_string())),
        }
    }

    /// Turn the command into an action against a catalog.
    ///
    /// `Add` needs the full item and fails for ids the catalog does not
    /// know. The other commands only match by id, so an unknown id resolves
    /// to an action the reducer will treat as a no-op.
    pub fn resolve(self, catalog: &Catalog) -> Result<Action, CartError> {
        let lookup = |id: ItemId| {
            catalog
                .get(id)
                .cloned()
                .unwrap_or_else(|| CatalogItem::new(id, String::new(), String::new()))
        };

        Ok(match self {
            ActionCommand::Add(id) => {
                let item = catalog
                    .get(id)
                    .cloned()
                    .ok_or(CartError::UnknownItem(id.get()))?;
                Action::AddToCart(item)
            }
            ActionCommand::Remove(id) => Action::RemoveFromCart(lookup(id)),
            ActionCommand::Increment(id) => Action::IncrementQuantity(lookup(id)),
            ActionCommand::Decrement(id) => Action::DecrementQuantity(lookup(id)),
            ActionCommand::Clear => Action::ClearCart,
        })
    }
}

impl FromStr for ActionCommand {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> CatalogItem {
        CatalogItem::new(1u64, "Laptop", "1200")
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(Action::AddToCart(laptop())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ADD_TO_CART",
                "item": {"id": 1, "name": "Laptop", "price": "1200"}
            })
        );

        let clear = serde_json::to_value(Action::ClearCart).unwrap();
        assert_eq!(clear, serde_json::json!({"type": "CLEAR_CART"}));
    }

    #[test]
    fn test_decode_actions() {
        let action: Action = serde_json::from_str(
            r#"{"type": "DECREMENT_QUANTITY", "item": {"id": 1, "name": "Laptop", "price": "1200"}}"#,
        )
        .unwrap();
        assert_eq!(action, Action::DecrementQuantity(laptop()));

        let action: Action = serde_json::from_str(r#"{"type": "CLEAR_CART"}"#).unwrap();
        assert_eq!(action, Action::ClearCart);
    }

    #[test]
    fn test_unknown_tag_decodes_to_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"type": "APPLY_COUPON"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
        assert_eq!(action.kind(), ActionKind::Unrecognized);
        assert!(action.item_id().is_none());
    }

    #[test]
    fn test_legacy_add_tag_decodes_to_add() {
        let action: Action = serde_json::from_str(
            r#"{"type": "ADD_TO_CART1", "item": {"id": 1, "name": "Laptop", "price": "1200"}}"#,
        )
        .unwrap();
        assert_eq!(action, Action::AddToCart(laptop()));

        // Encoding always uses the canonical tag.
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "ADD_TO_CART");
    }

    #[test]
    fn test_missing_payload_is_an_error() {
        let result = serde_json::from_str::<Action>(r#"{"type": "ADD_TO_CART"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_and_item_id() {
        let action = Action::IncrementQuantity(laptop());
        assert_eq!(action.kind(), ActionKind::IncrementQuantity);
        assert_eq!(action.kind().as_str(), "INCREMENT_QUANTITY");
        assert_eq!(action.item_id(), Some(ItemId::new(1)));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ActionCommand::parse("add 3").unwrap(), ActionCommand::Add(ItemId::new(3)));
        assert_eq!(ActionCommand::parse("add:3").unwrap(), ActionCommand::Add(ItemId::new(3)));
        assert_eq!(ActionCommand::parse("RM 4").unwrap(), ActionCommand::Remove(ItemId::new(4)));
        assert_eq!(ActionCommand::parse("+ 5").unwrap(), ActionCommand::Increment(ItemId::new(5)));
        assert_eq!(ActionCommand::parse("dec:6").unwrap(), ActionCommand::Decrement(ItemId::new(6)));
        assert_eq!(ActionCommand::parse("  clear ").unwrap(), ActionCommand::Clear);
        assert_eq!(ActionCommand::parse("+5").unwrap(), ActionCommand::Increment(ItemId::new(5)));
        assert_eq!(ActionCommand::parse("-5").unwrap(), ActionCommand::Decrement(ItemId::new(5)));
        assert_eq!(ActionCommand::parse("-#7").unwrap(), ActionCommand::Decrement(ItemId::new(7)));
    }

    #[test]
    fn test_parse_rejects_bad_commands() {
        assert!(ActionCommand::parse("").is_err());
        assert!(ActionCommand::parse("add").is_err());
        assert!(ActionCommand::parse("add x").is_err());
        assert!(ActionCommand::parse("clear 3").is_err());
        assert!(ActionCommand::parse("add 1 2").is_err());
        assert!(ActionCommand::parse("buy 1").is_err());
        assert!(ActionCommand::parse("+5 6").is_err());
        assert!(ActionCommand::parse("+x").is_err());
    }

    #[test]
    fn test_resolve_against_catalog() {
        let catalog = Catalog::reference();
        let action = ActionCommand::Add(ItemId::new(1)).resolve(&catalog).unwrap();
        assert_eq!(action, Action::AddToCart(laptop()));
    }

    #[test]
    fn test_resolve_unknown_add_fails() {
        let catalog = Catalog::reference();
        let result = ActionCommand::Add(ItemId::new(404)).resolve(&catalog);
        assert!(matches!(result, Err(CartError::UnknownItem(404))));
    }

    #[test]
    fn test_resolve_unknown_remove_keeps_id() {
        let catalog = Catalog::reference();
        let action = ActionCommand::Remove(ItemId::new(404)).resolve(&catalog).unwrap();
        assert_eq!(action.kind(), ActionKind::RemoveFromCart);
        assert_eq!(action.item_id(), Some(ItemId::new(404)));
    }
}
