// Server module entry point
// Binding, the sequential accept loop and interrupt handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as `server_loop`
#[path = "loop.rs"]
pub mod server_loop;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerState;

pub use listener::create_listener;

/// A bound static file server.
///
/// Binding happens in `bind`, so a busy port is reported before anything is
/// served; the `serve*` methods then consume the server.
pub struct Server {
    listener: TcpListener,
    state: Arc<ServerState>,
}

impl Server {
    /// Bind the listener. Must be called from within a tokio runtime.
    pub fn bind(addr: SocketAddr, state: ServerState) -> io::Result<Self> {
        Ok(Self {
            listener: create_listener(addr)?,
            state: Arc::new(state),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Serve until the process is terminated
    pub async fn serve(self) {
        server_loop::run(&self.listener, &self.state).await;
    }

    /// Serve until `shutdown` completes, then release the socket
    pub async fn serve_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        server_loop::run_until(&self.listener, &self.state, shutdown).await;
    }
}
