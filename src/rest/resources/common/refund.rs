//! Refund types embedded in orders and cancel requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::transaction::Transaction;

/// A refund against an order.
///
/// Carries the refunded line items and the transactions that moved the
/// money back. Also accepted inside an order cancel request to refund
/// while cancelling.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Refund {
    /// The unique identifier of the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the order this refund belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// When the refund was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// An optional note attached to the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether refunded items should be restocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,

    /// The ID of the user who processed the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Line items included in the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_line_items: Option<Vec<RefundLineItem>>,

    /// Transactions that moved the refunded amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
}

/// A single refunded line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefundLineItem {
    /// The unique identifier of the refund line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The refunded quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The ID of the order line item being refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,

    /// The order line item being refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item: Option<LineItem>,

    /// The refunded subtotal as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    /// The refunded tax as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_deserialization_with_line_items_and_transactions() {
        let json = r#"{
            "id": 509562969,
            "order_id": 450789469,
            "created_at": "2024-01-02T09:10:00Z",
            "note": "Customer returned the item",
            "restock": true,
            "user_id": 799407056,
            "refund_line_items": [
                {
                    "id": 104689539,
                    "quantity": 1,
                    "line_item_id": 703073504,
                    "subtotal": "195.67",
                    "total_tax": "3.98",
                    "line_item": {
                        "id": 703073504,
                        "title": "IPod Nano - 8gb",
                        "quantity": 1,
                        "price": "199.00"
                    }
                }
            ],
            "transactions": [
                {
                    "id": 179259969,
                    "order_id": 450789469,
                    "amount": "209.00",
                    "kind": "refund",
                    "status": "success"
                }
            ]
        }"#;

        let refund: Refund = serde_json::from_str(json).unwrap();

        assert_eq!(refund.id, Some(509562969));
        assert_eq!(refund.restock, Some(true));
        assert_eq!(refund.note, Some("Customer returned the item".to_string()));

        let line_items = refund.refund_line_items.unwrap();
        assert_eq!(line_items.len(), 1);
        assert_eq!(line_items[0].quantity, Some(1));
        assert_eq!(line_items[0].subtotal, Some("195.67".to_string()));
        assert_eq!(
            line_items[0].line_item.as_ref().unwrap().title,
            Some("IPod Nano - 8gb".to_string())
        );

        let transactions = refund.transactions.unwrap();
        assert_eq!(transactions[0].kind, Some("refund".to_string()));
        assert_eq!(transactions[0].amount, Some("209.00".to_string()));
    }

    #[test]
    fn test_refund_serialization_omits_unset_fields() {
        let refund = Refund {
            note: Some("Damaged in transit".to_string()),
            restock: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_value(&refund).unwrap();

        assert_eq!(json["note"], "Damaged in transit");
        assert_eq!(json["restock"], false);
        assert!(json.get("id").is_none());
        assert!(json.get("refund_line_items").is_none());
        assert!(json.get("transactions").is_none());
    }
}
