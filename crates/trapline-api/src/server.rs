//! Server lifecycle.

use std::future::Future;

use tokio::net::TcpListener;
use trapline_dashboard::Command;

use crate::routes::router;
use crate::state::AppState;
use crate::Result;

/// The dashboard web server.
#[derive(Debug, Clone)]
pub struct Server {
    state: AppState,
}

impl Server {
    /// Creates a server for the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Binds `listen_addr` and serves until Ctrl-C.
    pub async fn run(self, listen_addr: &str) -> Result<()> {
        let listener = TcpListener::bind(listen_addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Starts the initial load and serves on `listener` until `shutdown`
    /// completes. In-flight requests are allowed to finish.
    ///
    /// The page is served while the load runs and shows the loading
    /// indicator until it finishes.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let initial_load = self.state.spawn(vec![Command::Load]);

        let addr = listener.local_addr()?;
        tracing::info!(%addr, backend = %self.state.backend(), "Trapline dashboard listening");

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await?;

        initial_load.abort();
        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "Cannot listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
