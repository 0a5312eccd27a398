use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the HTTP listener and serve the API until the process is stopped
pub async fn serve(config: &Config, state: AppState) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    let app = router::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
