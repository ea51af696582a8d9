use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::assets::AssetStore;
use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::Router;

/// Pause after a failed accept so persistent errors (EMFILE) don't spin.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// The listening socket together with the route table it serves.
pub struct Server {
    listener: TcpListener,
    router: Router,
    max_request_bytes: usize,
}

impl Server {
    /// Binds the configured address. Must be called inside a tokio runtime.
    pub fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let router = Router::campus(AssetStore::new(&cfg.assets.root));
        Self::with_router(cfg, router)
    }

    pub fn with_router(cfg: &Config, router: Router) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg
            .server
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {}", cfg.server.listen_addr))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {addr}"))?;
        let listener = socket.listen(cfg.server.backlog)?;

        Ok(Self {
            listener,
            router,
            max_request_bytes: cfg.server.max_request_bytes,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts and serves connections one at a time, forever.
    ///
    /// Each connection is handled to completion before the next accept, so
    /// requests never overlap. Failures on a single connection are logged and
    /// do not stop the loop.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = accept_with_retry(|| self.listener.accept()).await;
            info!("Accepted connection from {}", peer);

            let mut conn = Connection::new(socket, peer, &self.router, self.max_request_bytes);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        }
    }
}

/// Awaits `accept` until it succeeds, pausing after each failure.
async fn accept_with_retry<T, F, Fut>(mut accept: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<T>>,
{
    loop {
        match accept().await {
            Ok(accepted) => return accepted,
            Err(e) => {
                tracing::error!("Failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
            }
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Server::bind(cfg)?.run().await
}
