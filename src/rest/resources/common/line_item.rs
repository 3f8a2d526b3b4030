//! Line item and related types for orders.
//!
//! This module provides structs for order line items, tax lines, discount
//! applications, and shipping lines. The fields that drift across API
//! versions (`LineItem::properties` and
//! `ShippingLine::requested_fulfillment_service_id`) are decoded through
//! the tolerant adapters in [`crate::rest::decode`].

use serde::{Deserialize, Serialize};

use crate::rest::decode::{deserialize_properties, deserialize_variant_scalar, NoteAttribute};

use super::money::AmountSet;

/// A tax applied to an order or line item.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::TaxLine;
///
/// let tax = TaxLine {
///     title: Some("State Tax".to_string()),
///     price: Some("5.99".to_string()),
///     rate: Some(0.08),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    /// The name of the tax (e.g., "State Tax", "VAT").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The tax amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The tax rate as a decimal (e.g., 0.08 for 8%).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

/// A discount code entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    /// The amount of the discount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The discount code that was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The type of discount (e.g., "percentage", `"fixed_amount"`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

/// A discount applied to an order.
///
/// Represents how a discount was applied, including the type, value,
/// and targeting information.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountApplication {
    /// The type of line the discount applies to (e.g., `line_item`, `shipping_line`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,

    /// The type of discount (e.g., `discount_code`, `manual`, `script`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// The value of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The type of value (e.g., `percentage`, `fixed_amount`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// How the discount is allocated (e.g., "across", "each", "one").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<String>,

    /// How line items are selected for the discount (e.g., "all", "entitled", "explicit").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<String>,

    /// The title of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The discount code used (if applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// An allocated discount amount on a line item.
///
/// Links a discount application to the specific amount allocated
/// to a line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountAllocation {
    /// The allocated discount amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The index of the discount application in the order's `discount_applications` array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_application_index: Option<i64>,

    /// The allocated amount in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<AmountSet>,
}

/// A line item in an order.
///
/// Represents a single product or variant being purchased, including
/// quantity, price, and applied discounts/taxes.
///
/// The `properties` field arrives in several historical shapes (array,
/// single object, or an empty-object marker) and is normalized to a list
/// during deserialization.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::LineItem;
///
/// let line_item = LineItem {
///     id: Some(123456),
///     variant_id: Some(789012),
///     product_id: Some(345678),
///     title: Some("Cool T-Shirt".to_string()),
///     quantity: Some(2),
///     price: Some("29.99".to_string()),
///     sku: Some("TSHIRT-BLUE-M".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The ID of the product variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The quantity of items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The price per item as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The total discount amount on this line item as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<String>,

    /// The title of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The title of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// The name of the product and variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The SKU of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The vendor of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Whether the item is a gift card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,

    /// Whether the item is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// The fulfillment service for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// Whether the item requires shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// The inventory management system for the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_inventory_management: Option<String>,

    /// The pre-tax price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tax_price: Option<String>,

    /// Custom properties on the line item.
    ///
    /// Normalized from the wire's array, single-object, and empty-marker
    /// shapes. An absent field decodes to an empty list.
    #[serde(
        default,
        deserialize_with = "deserialize_properties",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<NoteAttribute>,

    /// Whether the product still exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_exists: Option<bool>,

    /// The quantity that can still be fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,

    /// The fulfillment status of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Tax lines applied to this line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    /// Discount allocations for this line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_allocations: Option<Vec<DiscountAllocation>>,
}

/// A shipping line on an order.
///
/// The `requested_fulfillment_service_id` field arrives as a string, a
/// number, or null depending on the order's age, and is normalized to a
/// string during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    /// The unique identifier of the shipping line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The title of the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price of shipping as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The code for the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The source of the shipping rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The phone number for the shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The requested fulfillment service.
    ///
    /// Normalized from the wire's string, number, and null shapes; null
    /// and an absent field both decode to an empty string.
    #[serde(
        default,
        deserialize_with = "deserialize_variant_scalar",
        skip_serializing_if = "String::is_empty"
    )]
    pub requested_fulfillment_service_id: String,

    /// The delivery category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_category: Option<String>,

    /// The carrier identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,

    /// Tax lines for the shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tax_line_serialization() {
        let tax_line = TaxLine {
            title: Some("State Tax".to_string()),
            price: Some("8.50".to_string()),
            rate: Some(0.085),
        };

        let json = serde_json::to_string(&tax_line).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["title"], "State Tax");
        assert_eq!(parsed["price"], "8.50");
        assert_eq!(parsed["rate"], 0.085);
    }

    #[test]
    fn test_discount_application_with_type_rename() {
        let discount = DiscountApplication {
            discount_type: Some("discount_code".to_string()),
            value: Some("10.00".to_string()),
            value_type: Some("fixed_amount".to_string()),
            allocation_method: Some("across".to_string()),
            target_selection: Some("all".to_string()),
            target_type: Some("line_item".to_string()),
            code: Some("SAVE10".to_string()),
            title: Some("$10 Off".to_string()),
        };

        let json = serde_json::to_string(&discount).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Verify the type field is renamed from discount_type
        assert_eq!(parsed["type"], "discount_code");
        assert_eq!(parsed["value"], "10.00");
        assert_eq!(parsed["code"], "SAVE10");

        // Verify deserialization works with the renamed field
        let json_with_type = r#"{
            "type": "manual",
            "value": "5.00",
            "value_type": "percentage"
        }"#;
        let deserialized: DiscountApplication = serde_json::from_str(json_with_type).unwrap();
        assert_eq!(deserialized.discount_type, Some("manual".to_string()));
    }

    #[test]
    fn test_discount_code_serialization() {
        let discount = DiscountCode {
            code: Some("SAVE10".to_string()),
            amount: Some("10.00".to_string()),
            discount_type: Some("fixed_amount".to_string()),
        };

        let json = serde_json::to_string(&discount).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["code"], "SAVE10");
        assert_eq!(parsed["amount"], "10.00");
        assert_eq!(parsed["type"], "fixed_amount");
    }

    #[test]
    fn test_line_item_properties_array_shape() {
        let json = r#"{
            "id": 11111,
            "title": "Test Product",
            "quantity": 1,
            "properties": [
                {"name": "engraving", "value": "J + M"},
                {"name": "gift_wrap", "value": true}
            ]
        }"#;

        let line_item: LineItem = serde_json::from_str(json).unwrap();

        assert_eq!(line_item.properties.len(), 2);
        assert_eq!(line_item.properties[0].name, "engraving");
        assert_eq!(line_item.properties[0].value, json!("J + M"));
        assert_eq!(line_item.properties[1].value, json!(true));
    }

    #[test]
    fn test_line_item_properties_single_object_shape() {
        let json = r#"{
            "id": 11111,
            "properties": {"name": "gift_note", "value": "Enjoy!"}
        }"#;

        let line_item: LineItem = serde_json::from_str(json).unwrap();

        assert_eq!(line_item.properties.len(), 1);
        assert_eq!(line_item.properties[0].name, "gift_note");
    }

    #[test]
    fn test_line_item_properties_empty_object_collapses() {
        let json = r#"{"id": 11111, "properties": {}}"#;

        let line_item: LineItem = serde_json::from_str(json).unwrap();

        assert!(line_item.properties.is_empty());
    }

    #[test]
    fn test_line_item_properties_null_and_absent() {
        let with_null: LineItem =
            serde_json::from_str(r#"{"id": 1, "properties": null}"#).unwrap();
        assert!(with_null.properties.is_empty());

        let absent: LineItem = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(absent.properties.is_empty());
    }

    #[test]
    fn test_line_item_empty_properties_not_serialized() {
        let line_item = LineItem {
            id: Some(1),
            title: Some("Test".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&line_item).unwrap();
        assert!(json.get("properties").is_none());
    }

    #[test]
    fn test_line_item_with_nested_tax_lines() {
        let json = r#"{
            "id": 669751112,
            "variant_id": 457924702,
            "product_id": 632910392,
            "title": "IPod Nano - 8GB",
            "quantity": 1,
            "price": "199.00",
            "sku": "IPOD2008BLACK",
            "taxable": true,
            "tax_lines": [
                {"title": "State Tax", "price": "15.99", "rate": 0.08}
            ],
            "discount_allocations": [
                {
                    "amount": "5.00",
                    "discount_application_index": 0,
                    "amount_set": {
                        "shop_money": {"amount": "5.00", "currency_code": "USD"}
                    }
                }
            ]
        }"#;

        let line_item: LineItem = serde_json::from_str(json).unwrap();

        assert_eq!(line_item.id, Some(669751112));
        assert_eq!(line_item.price, Some("199.00".to_string()));

        let tax_lines = line_item.tax_lines.unwrap();
        assert_eq!(tax_lines.len(), 1);
        assert_eq!(tax_lines[0].title, Some("State Tax".to_string()));
        assert_eq!(tax_lines[0].rate, Some(0.08));

        let allocations = line_item.discount_allocations.unwrap();
        assert_eq!(allocations[0].amount, Some("5.00".to_string()));
        let amount_set = allocations[0].amount_set.as_ref().unwrap();
        assert_eq!(
            amount_set.shop_money.as_ref().unwrap().currency_code,
            Some("USD".to_string())
        );
    }

    #[test]
    fn test_shipping_line_fulfillment_service_id_as_string() {
        let json = r#"{
            "id": 9999,
            "title": "Standard Shipping",
            "price": "5.99",
            "requested_fulfillment_service_id": "manual"
        }"#;

        let shipping: ShippingLine = serde_json::from_str(json).unwrap();

        assert_eq!(shipping.requested_fulfillment_service_id, "manual");
    }

    #[test]
    fn test_shipping_line_fulfillment_service_id_as_number() {
        let json = r#"{
            "id": 9999,
            "requested_fulfillment_service_id": 1989564
        }"#;

        let shipping: ShippingLine = serde_json::from_str(json).unwrap();

        assert_eq!(shipping.requested_fulfillment_service_id, "1989564");
    }

    #[test]
    fn test_shipping_line_fulfillment_service_id_null_and_absent() {
        let with_null: ShippingLine = serde_json::from_str(
            r#"{"id": 1, "requested_fulfillment_service_id": null}"#,
        )
        .unwrap();
        assert_eq!(with_null.requested_fulfillment_service_id, "");

        let absent: ShippingLine = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(absent.requested_fulfillment_service_id, "");
    }

    #[test]
    fn test_shipping_line_fulfillment_service_id_rejects_object() {
        let json = r#"{
            "id": 1,
            "requested_fulfillment_service_id": {"id": 5}
        }"#;

        let result: Result<ShippingLine, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_shipping_line_serialization_skips_empty_service_id() {
        let shipping = ShippingLine {
            id: Some(9999),
            title: Some("Standard Shipping".to_string()),
            price: Some("5.99".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&shipping).unwrap();

        assert_eq!(json["title"], "Standard Shipping");
        assert!(json.get("requested_fulfillment_service_id").is_none());
    }
}
