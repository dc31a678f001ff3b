use pos_ledger::{
    config::LedgerConfig,
    services::{order_service, product_service},
    state::Ledger,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pos_ledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LedgerConfig::from_env();
    let ledger = Ledger::open(&config)?;

    product_service::initialize_defaults(&ledger)?;

    let products = product_service::list_products(&ledger)?;
    let orders = order_service::list_orders(&ledger)?;
    println!(
        "Ledger ready at {}: {} products, {} orders within the {}-day window",
        config.data_dir,
        products.len(),
        orders.len(),
        config.retention_days,
    );

    Ok(())
}
