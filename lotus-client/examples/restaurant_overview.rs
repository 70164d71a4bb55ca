//! Restaurant overview example
//!
//! Fetches the menu, table and order collections from a running
//! restaurant backend and prints the locally computed dashboard figures.
//!
//! Usage: cargo run --example restaurant_overview -- http://localhost:8084

use lotus_client::views::RestaurantOverview;
use lotus_client::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8084".to_string());

    let overview = RestaurantOverview::new(&ClientConfig::new(&base_url))?;
    overview.refresh().await?;

    let stats = overview.statistics().await;
    println!("Menu items: {} ({} available)", stats.total_menu_items, stats.available_menu_items);
    println!(
        "Tables:     {} ({} available, {} occupied)",
        stats.total_tables, stats.available_tables, stats.occupied_tables
    );
    println!(
        "Orders:     {} ({} pending, {} active)",
        stats.total_orders, stats.pending_orders, stats.active_orders
    );
    println!("Revenue:    {:.2}", stats.total_revenue);

    match overview.average_order_value().await {
        Some(avg) => println!("Avg order:  {avg:.2}"),
        None => println!("Avg order:  n/a"),
    }
    println!("Served:     {:.1}%", overview.served_share().await);

    println!("\nMenu by category:");
    for (category, count) in overview.menu_by_category().await {
        println!("  {category:<12} {count}");
    }

    println!("\nOrders by status:");
    for (status, count) in overview.orders_by_status().await {
        println!("  {status:<12} {count}");
    }

    Ok(())
}
