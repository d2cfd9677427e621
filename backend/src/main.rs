use backend::auth::AuthProvider;
use backend::config::AppConfig;
use backend::web_server::{run_server, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    // Configuration must validate before anything binds or connects.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            // Operator-facing diagnostic only, no backtrace.
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Configuration loaded: port={}, environment={}",
        config.port(),
        config.node_env()
    );

    let db_pool = backend::db::connect_lazy(config.database_url())?;
    let auth = AuthProvider::with_defaults(db_pool);

    run_server(AppState { config, auth }).await
}
