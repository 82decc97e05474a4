//! Thunder Services JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::{Any, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use thunder_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod admin;
mod analytics;
mod config;
mod extensions;
mod health;
mod images;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
mod testimonials;
#[cfg(test)]
mod test_helpers;

/// Thunder Services JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let app = match prepare_app(&config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!(?init_error, "failed to initialize app context");

            process::exit(1);
        }
    };

    if config.database.seed_on_startup {
        match app.seeding.seed_all().await {
            Ok(report) => info!(
                products = report.products,
                testimonials = report.testimonials,
                "startup seeding completed"
            ),
            Err(seed_error) => warn!("startup seeding failed, continuing: {seed_error}"),
        }
    }

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(&app)))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::api_router());

    let doc = OpenApi::new("Thunder Services API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let cors = Cors::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .into_handler();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;
    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(Service::new(router).hoop(cors)).await;

    info!("server stopped");
}

async fn prepare_app(
    config: &ServerConfig,
) -> Result<AppContext, thunder_app::context::AppInitError> {
    let app = AppContext::from_database(
        &config.database.database_url,
        &config.database.database_name,
    )?;

    app.migrate().await?;

    info!(
        database = %config.database.database_name,
        "database migrations applied"
    );

    Ok(app)
}
