use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{OrderItem, OrderStatus};

/// Everything the presentation layer supplies for create-or-merge; the core
/// assigns `id` and stamps `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total: i64,
    pub status: OrderStatus,
}

/// Partial update applied by id. Only the fields set here change; a patch
/// carrying a status value also triggers the customer-directory side effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
