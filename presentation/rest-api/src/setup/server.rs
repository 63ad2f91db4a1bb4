use std::time::Duration;

use poem::{
    EndpointExt, Route, Server as PoemServer, endpoint::BoxEndpoint, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &addr);

        tracing::info!("Cart server is listening at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                shutdown_signal(),
                Some(Duration::from_secs(10)),
            )
            .await?;
        Ok(())
    }

    pub fn app(container: DependencyContainer, addr: &str) -> BoxEndpoint<'static> {
        let api_service = OpenApiService::new(
            (container.health_api, container.cart_api),
            "Cart Service API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(Tracing)
            .boxed()
    }
}

/// Resolves on Ctrl-C. Without a signal handler it never resolves.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            tracing::error!(error = %e, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
