use dotenvy::dotenv;
use pantry_buddy::{
    clock::SystemClock,
    config::{database, settings},
    core::dashboard,
    errors::Result,
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Number of inventory lines printed in the text summary
const SUMMARY_ITEMS: usize = 10;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load engine settings
    let settings = settings::load_settings_or_default(settings::settings_path())
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;

    // 4. Connect and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))?;

    // 5. Build the dashboard for the requested household
    let household_id = settings::resolve_household_id(env::var(settings::HOUSEHOLD_ID_ENV))
        .inspect_err(|e| error!("Invalid household id: {}", e))?;

    let dashboard =
        dashboard::generate_household_dashboard(&db, household_id, &SystemClock, &settings)
            .await
            .inspect_err(|e| error!("Failed to generate dashboard: {}", e))?;

    info!(
        "\n{}",
        dashboard::format_dashboard_summary(&dashboard, SUMMARY_ITEMS)
    );
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    Ok(())
}
