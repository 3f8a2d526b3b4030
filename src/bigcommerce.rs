//! BigCommerce catalog modifier types.
//!
//! Plain data types for product modifiers from the BigCommerce catalog
//! API, used when reconciling catalogs migrated between platforms. These
//! types only carry data; no service methods are attached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A product modifier from the BigCommerce catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Modifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The modifier type (e.g., "dropdown", "checkbox").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub modifier_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Type-specific configuration, left free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_values: Option<Vec<ModifierValue>>,
}

/// A selectable value nested in a [`Modifier`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModifierValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Value payload whose shape depends on the modifier type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_data: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusters: Option<ModifierAdjusters>,
}

/// Adjustments applied when a modifier value is selected.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModifierAdjusters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceAdjuster>,

    /// Weight adjustment payload, left free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled: Option<PurchasingDisabled>,
}

/// A price adjustment on a modifier value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceAdjuster {
    /// How the adjustment applies (e.g., "relative", "percentage").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjuster: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjuster_value: Option<f64>,
}

/// Purchasing restrictions on a modifier value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PurchasingDisabled {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A modifier option value with its display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ModifierOptionValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_modifier_deserializes_catalog_payload() {
        let json = r#"{
            "id": 55,
            "product_id": 127,
            "name": "gift-wrap",
            "display_name": "Gift Wrap",
            "type": "dropdown",
            "required": false,
            "sort_order": 1,
            "config": {"default_value": "none"},
            "option_values": [
                {
                    "id": 101,
                    "option_id": 55,
                    "label": "Festive",
                    "sort_order": 0,
                    "value_data": null,
                    "is_default": true,
                    "adjusters": {
                        "price": {"adjuster": "relative", "adjuster_value": 3.5},
                        "weight": null,
                        "image_url": "https://cdn.example.com/wrap.png",
                        "purchasing_disabled": {"status": false, "message": ""}
                    }
                }
            ]
        }"#;

        let modifier: Modifier = serde_json::from_str(json).unwrap();

        assert_eq!(modifier.id, Some(55));
        assert_eq!(modifier.modifier_type.as_deref(), Some("dropdown"));
        assert_eq!(
            modifier.config.as_ref().unwrap().get("default_value"),
            Some(&json!("none"))
        );

        let values = modifier.option_values.unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].label.as_deref(), Some("Festive"));
        assert_eq!(values[0].is_default, Some(true));

        let adjusters = values[0].adjusters.as_ref().unwrap();
        let price = adjusters.price.as_ref().unwrap();
        assert_eq!(price.adjuster.as_deref(), Some("relative"));
        assert_eq!(price.adjuster_value, Some(3.5));
        assert_eq!(
            adjusters.purchasing_disabled.as_ref().unwrap().status,
            Some(false)
        );
    }

    #[test]
    fn test_modifier_skips_unset_fields_when_serialized() {
        let modifier = Modifier {
            id: Some(55),
            name: Some("gift-wrap".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&modifier).unwrap();

        assert_eq!(json, json!({"id": 55, "name": "gift-wrap"}));
    }

    #[test]
    fn test_modifier_type_maps_to_type_key() {
        let modifier = Modifier {
            modifier_type: Some("checkbox".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&modifier).unwrap();

        assert_eq!(json, json!({"type": "checkbox"}));
    }

    #[test]
    fn test_modifier_option_value_round_trip() {
        let json = r#"{
            "id": 7,
            "label": "Large",
            "option_id": 3,
            "option_display_name": "Size"
        }"#;

        let value: ModifierOptionValue = serde_json::from_str(json).unwrap();

        assert_eq!(value.id, Some(7));
        assert_eq!(value.label.as_deref(), Some("Large"));
        assert_eq!(value.option_id, Some(3));
        assert_eq!(value.option_display_name.as_deref(), Some("Size"));

        let serialized = serde_json::to_value(&value).unwrap();
        assert_eq!(
            serialized,
            serde_json::from_str::<serde_json::Value>(json).unwrap()
        );
    }
}
