use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Snapshot of a product's name and price at the moment it was added to an
/// order. Not re-synced if the catalog later changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    /// Caller-supplied; never recomputed from `items` by this crate.
    pub total: i64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond-timestamp id, bumped past the previous one when two calls land
/// in the same millisecond.
pub(crate) fn fresh_id() -> String {
    let now = Utc::now().timestamp_millis();
    let id = match LAST_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
        Some(if now > prev { now } else { prev + 1 })
    }) {
        Ok(prev) | Err(prev) => {
            if now > prev {
                now
            } else {
                prev + 1
            }
        }
    };
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_with_camel_case_keys() {
        let order = Order {
            id: "1".into(),
            customer_id: "c1".into(),
            customer_name: "Maria".into(),
            items: vec![OrderItem {
                product_id: "p1".into(),
                product_name: "Espetinho de Carne".into(),
                quantity: 2,
                price: 500,
            }],
            total: 1000,
            created_at: Utc::now(),
            status: OrderStatus::Open,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("customerId").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["status"], "open");
        assert_eq!(value["items"][0]["productId"], "p1");
    }

    #[test]
    fn customer_phone_is_omitted_when_absent() {
        let customer = Customer {
            id: "c1".into(),
            name: "Maria".into(),
            phone: None,
        };
        let value = serde_json::to_value(&customer).unwrap();
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn fresh_ids_are_strictly_increasing() {
        let a: i64 = fresh_id().parse().unwrap();
        let b: i64 = fresh_id().parse().unwrap();
        assert!(b > a);
    }
}
