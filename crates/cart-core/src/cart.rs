//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::ids::ItemId;

/// One catalog item plus a quantity, as held in the cart.
///
/// A line in a [`Cart`] always has `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLine {
    /// Item identifier, unique within the cart.
    pub id: ItemId,
    /// Item name (copied from the catalog).
    pub name: String,
    /// Item price literal (copied from the catalog).
    pub price: String,
    /// Quantity.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a catalog item with the given quantity.
    pub fn new(item: &CatalogItem, quantity: u32) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price.clone(),
            quantity,
        }
    }
}

/// An ordered, id-unique collection of line items.
///
/// Lines keep the position of their first addition. Carts are produced by
/// [`crate::transition`]; nothing else mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines.
    ///
    /// Lines with quantity 0 are dropped and only the first line of any
    /// repeated id is kept, so the result always satisfies the cart
    /// invariants.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut out: Vec<CartLine> = Vec::new();
        for line in lines {
            if line.quantity == 0 || out.iter().any(|l| l.id == line.id) {
                continue;
            }
            out.push(line);
        }
        Self { lines: out }
    }

    pub(crate) fn from_vec_unchecked(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for an item.
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Check whether the item has a line.
    pub fn contains(&self, id: ItemId) -> bool {
        self.line(id).is_some()
    }

    /// Get the quantity held for an item (0 when absent).
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.line(id).map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(u64::from(l.quantity)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u64, quantity: u32) -> CartLine {
        CartLine::new(&CatalogItem::new(id, format!("Item {id}"), "10"), quantity)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_from_lines_drops_duplicates_and_zero() {
        let cart = Cart::from_lines([line(1, 2), line(2, 0), line(1, 5), line(3, 1)]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(ItemId::new(1)), 2);
        assert!(!cart.contains(ItemId::new(2)));
        assert_eq!(cart.lines()[1].id, ItemId::new(3));
    }

    #[test]
    fn test_item_count() {
        let cart = Cart::from_lines([line(1, 2), line(2, 3)]);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_line_copies_item() {
        let item = CatalogItem::new(4u64, "Camera", "500");
        let line = CartLine::new(&item, 1);
        assert_eq!((line.id, line.name.as_str(), line.price.as_str()), (item.id, "Camera", "500"));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_decoded_cart_keeps_invariants() {
        let cart: Cart = serde_json::from_str(
            r#"[
                {"id": 1, "name": "A", "price": "1", "quantity": 2},
                {"id": 1, "name": "A", "price": "1", "quantity": 9},
                {"id": 2, "name": "B", "price": "2", "quantity": 0}
            ]"#,
        )
        .unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ItemId::new(1)), 2);
    }

    #[test]
    fn test_cart_serializes_as_array() {
        let cart = Cart::from_lines([line(1, 1)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": 1, "name": "Item 1", "price": "10", "quantity": 1}])
        );
    }
}
