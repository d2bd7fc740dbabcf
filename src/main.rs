use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use tokio::main;

use users_api::{
    config::Config,
    domain::repositories::UserRepository,
    infrastructure::repositories::{InMemoryUserRepository, PostgresUserRepository, postgres},
    presentation::http::build_app,
    telemetry,
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    telemetry::init();

    let repo: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            let pool = postgres::connect(url, config.database_max_connections)
                .await
                .map_err(Error::other)?;
            tracing::info!("using postgres user store");
            PostgresUserRepository::new(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let server_url = config.server_url();
    tracing::info!("Starting server at {}", server_url);

    let app = build_app(repo, server_url);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app)
        .await
}
