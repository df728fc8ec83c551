//! Product catalog types.
//!
//! These mirror the backend's product and category resources. The client
//! never invents fields: whatever the server returns is what gets cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};

/// A product as served by the backend.
///
/// The collection a client holds preserves server response order. `id`
/// uniqueness is the server's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category name, if the product is categorized.
    pub category: Option<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Units currently on hand.
    pub stock: i32,
}

/// Payload for creating or replacing a product.
///
/// The server assigns (or keeps) the ID and echoes the authoritative record
/// back, which is what gets cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Category name, if any.
    pub category: Option<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Units on hand.
    pub stock: i32,
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            category: product.category,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// A product category. Flat set, no hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_product_wire_shape() {
        let product = Product {
            id: ProductId::new(3),
            name: "Kopi Susu".to_string(),
            category: Some("Drinks".to_string()),
            price: Decimal::new(15_000, 0),
            stock: 24,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Kopi Susu");
        assert_eq!(value["category"], "Drinks");
        assert_eq!(value["stock"], 24);

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_draft_from_product_drops_id() {
        let product = Product {
            id: ProductId::new(9),
            name: "Teh Tarik".to_string(),
            category: None,
            price: Decimal::new(8_000, 0),
            stock: 5,
        };

        let draft = ProductDraft::from(product.clone());
        assert_eq!(draft.name, product.name);
        assert_eq!(draft.stock, product.stock);
        assert!(serde_json::to_value(&draft).unwrap().get("id").is_none());
    }
}
