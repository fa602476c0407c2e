use crate::error::{Result, RuntimeError};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind a TCP listener, keeping the address in the error.
///
/// # Errors
///
/// Returns [`RuntimeError::Bind`] if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| RuntimeError::Bind { addr, source })
}

/// Bind `addr` and serve `router` until Ctrl-C / SIGTERM.
///
/// # Errors
///
/// Returns an error if binding fails or the server stops with an IO error.
pub async fn run(service: &'static str, addr: SocketAddr, router: Router) -> Result<()> {
    let listener = bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(service, addr = %local, "listening");

    serve_until(listener, router, shutdown_signal()).await?;

    tracing::info!(service, "shut down");
    Ok(())
}

/// Serve `router` on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
///
/// # Errors
///
/// Returns an error if the accept loop fails.
pub async fn serve_until<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
