use axum_helpers::{create_app, create_router, health_router};
use core_config::app_info;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_registration::{
    handlers, Argon2PasswordHasher, InMemoryUserDirectory, RegistrationWorkflow,
};
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Wire the workflow's collaborators explicitly: the user directory and
    // the password hasher are constructor parameters, not ambient wiring.
    let directory = InMemoryUserDirectory::new();
    let workflow = RegistrationWorkflow::new(directory, Argon2PasswordHasher);

    let api_routes = axum::Router::new().nest("/users", handlers::router(workflow));

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge the /health liveness endpoint into the app
    let app = router.merge(health_router(app_info!()));

    info!("Starting registration API");

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Registration API shutdown complete");
    Ok(())
}
