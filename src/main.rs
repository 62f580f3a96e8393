use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bustrack_store::{Config, RosterStore, storage::FileStore};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bustrack_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Using data directory {}", config.data_dir.display());

    // Open the blob store and restore persisted state
    let storage = FileStore::new(&config.data_dir).expect("Failed to open data directory");
    let store = RosterStore::load(storage);

    tracing::info!(
        accounts = store.accounts().len(),
        buses = store.buses().len(),
        assignments = store.assignments().len(),
        "Roster store ready"
    );

    match store.session() {
        Some(account) => {
            tracing::info!(email = %account.email, role = ?account.role, "Restored session")
        }
        None => tracing::info!("No active session"),
    }
}
