// Connection handling module
// Serves one accepted TCP connection to completion

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::ServerState;
use crate::handler;
use crate::logger;

/// Serve a single connection, returning only once it is closed.
///
/// Keep-alive is disabled, so the connection carries exactly one request.
/// No timeout applies: an idle client holds the server until it goes away.
pub async fn serve_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<ServerState>,
) {
    let io = TokioIo::new(stream);

    let mut builder = http1::Builder::new();
    builder.keep_alive(false).title_case_headers(true);

    let service = service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr));

    if let Err(err) = builder.serve_connection(io, service).await {
        logger::log_connection_error(&err);
    }
}
