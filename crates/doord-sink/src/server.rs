use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::SinkConfig;
use crate::error::SinkResult;
use crate::handler::SinkState;
use crate::router::build_router;

/// The doord append-only listener.
pub struct DoordSink {
    config: SinkConfig,
}

impl DoordSink {
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::new(SinkState::new(self.config.clone())))
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM.
    pub async fn serve(self) -> SinkResult<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> SinkResult<()> {
        let app = self.router();
        info!(
            addr = %listener.local_addr()?,
            output = %self.config.output_path.display(),
            "doord listener started"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("doord listener stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
