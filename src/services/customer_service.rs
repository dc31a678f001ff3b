use crate::error::LedgerResult;
use crate::models::{Customer, fresh_id};
use crate::state::Ledger;
use crate::store::CUSTOMERS_KEY;

pub fn list_customers(ledger: &Ledger) -> LedgerResult<Vec<Customer>> {
    Ok(ledger.read_collection(CUSTOMERS_KEY)?.unwrap_or_default())
}

/// Appends a customer under a fresh id. Names are not deduplicated; two
/// customers may share one.
pub fn add_customer(
    ledger: &Ledger,
    name: impl Into<String>,
    phone: Option<String>,
) -> LedgerResult<Customer> {
    let customer = Customer {
        id: fresh_id(),
        name: name.into(),
        phone,
    };

    let mut customers = list_customers(ledger)?;
    customers.push(customer.clone());
    ledger.write_collection(CUSTOMERS_KEY, &customers)?;

    tracing::debug!(customer_id = %customer.id, "customer added");
    Ok(customer)
}
