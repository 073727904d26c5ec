//! Persisted cart format: a JSON array of line items.
//!
//! Field names match what the storefront writes (`id`, `name`, `price`,
//! `path`, `year`, `color`, `mileage`, `quantity`); `quantity` may be absent
//! and then reads as 1.

use crate::error::CartError;

use super::item::CartLineItem;

/// Storage key the cart is mirrored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Serialize the item sequence, order preserved.
pub fn encode_items(items: &[CartLineItem]) -> Result<String, CartError> {
    serde_json::to_string(items).map_err(CartError::Encode)
}

/// Parse a persisted item sequence.
pub fn decode_items(raw: &str) -> Result<Vec<CartLineItem>, CartError> {
    serde_json::from_str(raw).map_err(CartError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_preserves_order_and_fields() {
        let items = vec![
            CartLineItem::new(2, "Corolla", 70_000.0)
                .with_path("/img/corolla.png")
                .with_year(2021)
                .with_color("Prata")
                .with_mileage(32_000),
            CartLineItem::new(1, "Gol", 50_000.5),
        ];
        let raw = encode_items(&items).unwrap();
        assert_eq!(decode_items(&raw).unwrap(), items);
    }

    #[test]
    fn missing_quantity_defaults_to_one() {
        let raw = r#"[{"id":1,"name":"Gol","price":50000,"path":"/gol.png","year":2019,"color":"Branco","mileage":41000}]"#;
        let items = decode_items(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].price, 50_000.0);
        assert_eq!(items[0].color, "Branco");
    }

    #[test]
    fn encoded_field_names_match_storefront() {
        let raw = encode_items(&[CartLineItem::new(5, "Kwid", 60_000.0)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = value[0].as_object().unwrap();
        for field in ["id", "name", "price", "path", "year", "color", "mileage", "quantity"] {
            assert!(obj.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn malformed_input_is_a_decode_error() {
        assert!(matches!(decode_items("{not json"), Err(CartError::Decode(_))));
        assert!(matches!(
            decode_items(r#"{"id":1}"#),
            Err(CartError::Decode(_))
        ));
    }
}
