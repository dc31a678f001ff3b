use crate::error::LedgerResult;
use crate::models::Product;
use crate::services::order_service;
use crate::state::Ledger;
use crate::store::PRODUCTS_KEY;

/// Catalog seeded on first run. Prices are in cents.
pub fn default_catalog() -> Vec<Product> {
    let catalog = [
        ("1", "Espetinho de Carne", 500, "Espetinho"),
        ("2", "Espetinho de Frango", 450, "Espetinho"),
        ("3", "Espetinho de Linguiça", 550, "Espetinho"),
        ("4", "Espetinho de Queijo", 400, "Espetinho"),
        ("5", "Espetinho de Coração", 600, "Espetinho"),
        ("6", "Refrigerante Lata", 500, "Bebida"),
        ("7", "Água", 300, "Bebida"),
        ("8", "Cerveja", 800, "Bebida"),
    ];
    catalog
        .into_iter()
        .map(|(id, name, price, category)| Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category: category.to_string(),
        })
        .collect()
}

/// Returns the stored catalog, or the built-in defaults when the key has
/// never been written (nothing is persisted on that path).
pub fn list_products(ledger: &Ledger) -> LedgerResult<Vec<Product>> {
    Ok(ledger
        .read_collection(PRODUCTS_KEY)?
        .unwrap_or_else(default_catalog))
}

/// Idempotent bootstrap: seeds the default catalog only if no catalog key
/// exists yet, then runs the retention sweep. Safe on every start.
pub fn initialize_defaults(ledger: &Ledger) -> LedgerResult<()> {
    if ledger
        .read_collection::<Product>(PRODUCTS_KEY)?
        .is_none()
    {
        let catalog = default_catalog();
        ledger.write_collection(PRODUCTS_KEY, &catalog)?;
        tracing::info!(products = catalog.len(), "seeded default catalog");
    }

    order_service::clean_old_orders(ledger)
}
