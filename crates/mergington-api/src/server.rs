//! HTTP server lifecycle management.
//!
//! [`start_server`] binds to a TCP port and serves the router until
//! `Ctrl-C` is received. [`serve`] runs an already-bound listener until
//! an arbitrary shutdown future resolves, which is what tests use.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use mergington_core::config::HttpConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl From<&HttpConfig> for ServerConfig {
    fn from(config: &HttpConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

impl ServerConfig {
    /// Combine host and port into a socket address.
    ///
    /// The host is parsed as a bare IPv4 or IPv6 address, so `::` and
    /// `0.0.0.0` both work without brackets.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid host {}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Start the HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C`. In-flight requests finish before this
/// returns.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Activities server listening");

    serve(listener, state, shutdown_signal()).await
}

/// Serve the router on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the server hits a fatal I/O error.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Activities server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
    }
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> ServerConfig {
        ServerConfig {
            host: host.to_owned(),
            port,
        }
    }

    #[test]
    fn socket_addr_accepts_ipv4() {
        let addr = config("0.0.0.0", 8000).socket_addr();
        assert_eq!(addr.ok(), "0.0.0.0:8000".parse().ok());
    }

    #[test]
    fn socket_addr_accepts_bare_ipv6() {
        let addr = config("::", 8000).socket_addr();
        assert_eq!(addr.ok(), "[::]:8000".parse().ok());

        let loopback = config("::1", 9000).socket_addr();
        assert_eq!(loopback.ok(), "[::1]:9000".parse().ok());
    }

    #[test]
    fn socket_addr_rejects_hostnames() {
        let addr = config("localhost", 8000).socket_addr();
        assert!(matches!(addr, Err(ServerError::Bind(_))));
    }
}
