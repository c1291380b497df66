//! # Axum Helpers
//!
//! Shared utilities for building Axum web applications:
//!
//! - **[`errors`]**: structured error response body and 404 fallback
//! - **[`health`]**: liveness endpoint reporting app name and version
//! - **[`server`]**: router assembly with OpenAPI docs, server startup
//! - **[`shutdown`]**: graceful shutdown on SIGINT/SIGTERM
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!     let app = router.merge(health_router(app_info!()));
//!
//!     create_app(app, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod health;
pub mod server;
pub mod shutdown;

pub use errors::{not_found, ErrorResponse};
pub use health::{health_router, HealthResponse};
pub use server::{create_app, create_router};
pub use shutdown::shutdown_signal;
