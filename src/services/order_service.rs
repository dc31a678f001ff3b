use chrono::{Duration, Utc};

use crate::dto::orders::{OrderDraft, OrderPatch};
use crate::error::LedgerResult;
use crate::models::{Customer, Order, OrderStatus, fresh_id};
use crate::state::Ledger;
use crate::store::{CUSTOMERS_KEY, ORDERS_KEY};

pub fn list_orders(ledger: &Ledger) -> LedgerResult<Vec<Order>> {
    Ok(ledger.read_collection(ORDERS_KEY)?.unwrap_or_default())
}

/// The single open order for a customer, if any. At most one can exist.
pub fn get_open_order_by_customer(
    ledger: &Ledger,
    customer_id: &str,
) -> LedgerResult<Option<Order>> {
    let orders = list_orders(ledger)?;
    Ok(orders
        .into_iter()
        .find(|o| o.customer_id == customer_id && o.status == OrderStatus::Open))
}

/// Create-or-merge. An existing open order for the draft's customer is
/// overwritten in place (same id, `created_at` refreshed), which keeps the
/// one-open-order-per-customer invariant; otherwise a new order is appended.
pub fn add_order(ledger: &Ledger, draft: OrderDraft) -> LedgerResult<Order> {
    let mut orders = list_orders(ledger)?;

    let existing = orders
        .iter()
        .position(|o| o.customer_id == draft.customer_id && o.status == OrderStatus::Open);

    let order = match existing {
        Some(index) => {
            let merged = Order {
                id: orders[index].id.clone(),
                customer_id: draft.customer_id,
                customer_name: draft.customer_name,
                items: draft.items,
                total: draft.total,
                created_at: Utc::now(),
                status: draft.status,
            };
            orders[index] = merged.clone();
            tracing::debug!(order_id = %merged.id, "merged into existing open order");
            merged
        }
        None => {
            let order = Order {
                id: fresh_id(),
                customer_id: draft.customer_id,
                customer_name: draft.customer_name,
                items: draft.items,
                total: draft.total,
                created_at: Utc::now(),
                status: draft.status,
            };
            orders.push(order.clone());
            tracing::debug!(order_id = %order.id, "order created");
            order
        }
    };

    ledger.write_collection(ORDERS_KEY, &orders)?;
    Ok(order)
}

/// Applies a field patch by id; silently a no-op when the id is absent.
///
/// A patch carrying a status value also adjusts the customer directory, on
/// every call including redundant ones: closing removes the order's customer
/// (the order keeps `customer_id`/`customer_name` as the receipt), reopening
/// recreates the customer from those fields if absent (phone is lost).
pub fn update_order(ledger: &Ledger, order_id: &str, patch: OrderPatch) -> LedgerResult<()> {
    let mut orders: Vec<Order> = list_orders(ledger)?;

    let Some(index) = orders.iter().position(|o| o.id == order_id) else {
        return Ok(());
    };

    let customer_id = orders[index].customer_id.clone();
    let customer_name = orders[index].customer_name.clone();

    let order = &mut orders[index];
    if let Some(name) = patch.customer_name {
        order.customer_name = name;
    }
    if let Some(items) = patch.items {
        order.items = items;
    }
    if let Some(total) = patch.total {
        order.total = total;
    }
    if let Some(created_at) = patch.created_at {
        order.created_at = created_at;
    }
    if let Some(status) = patch.status {
        order.status = status;
    }
    ledger.write_collection(ORDERS_KEY, &orders)?;

    match patch.status {
        Some(OrderStatus::Closed) => {
            let mut customers: Vec<Customer> =
                ledger.read_collection(CUSTOMERS_KEY)?.unwrap_or_default();
            customers.retain(|c| c.id != customer_id);
            ledger.write_collection(CUSTOMERS_KEY, &customers)?;
            tracing::debug!(order_id, %customer_id, "order closed, customer released");
        }
        Some(OrderStatus::Open) => {
            let mut customers: Vec<Customer> =
                ledger.read_collection(CUSTOMERS_KEY)?.unwrap_or_default();
            if !customers.iter().any(|c| c.id == customer_id) {
                customers.push(Customer {
                    id: customer_id.clone(),
                    name: customer_name,
                    phone: None,
                });
                ledger.write_collection(CUSTOMERS_KEY, &customers)?;
                tracing::debug!(order_id, %customer_id, "order reopened, customer recreated");
            }
        }
        None => {}
    }

    Ok(())
}

/// Unconditional removal; the customer directory is never touched here.
pub fn delete_order(ledger: &Ledger, order_id: &str) -> LedgerResult<()> {
    let mut orders = list_orders(ledger)?;
    orders.retain(|o| o.id != order_id);
    ledger.write_collection(ORDERS_KEY, &orders)
}

/// Retention sweep: drops every order older than the retention window,
/// open or closed alike. Rewrites the collection only when something was
/// actually pruned.
pub fn clean_old_orders(ledger: &Ledger) -> LedgerResult<()> {
    let Some(orders) = ledger.read_collection::<Order>(ORDERS_KEY)? else {
        return Ok(());
    };

    let cutoff = Utc::now() - Duration::days(ledger.retention_days());
    let recent: Vec<Order> = orders
        .iter()
        .filter(|o| o.created_at > cutoff)
        .cloned()
        .collect();

    if recent.len() != orders.len() {
        tracing::debug!(pruned = orders.len() - recent.len(), "old orders pruned");
        ledger.write_collection(ORDERS_KEY, &recent)?;
    }

    Ok(())
}
