//! Axum-based API server.

use std::io;
use std::sync::Arc;

use lumen_wallet::{Ledger, WalletService};
use tracing::info;

use crate::handlers;

/// Serves the wallet API on a fixed port.
pub struct RpcServer<L> {
    port: u16,
    service: Arc<WalletService<L>>,
}

impl<L: Ledger + 'static> RpcServer<L> {
    pub fn new(port: u16, service: Arc<WalletService<L>>) -> Self {
        Self { port, service }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> io::Result<()> {
        let app = handlers::router(self.service.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        info!("wallet API listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok(())
    }
}
