//! Process entry point shared by the three server binaries

use crate::config::{Config, ServerState, Variant};
use crate::logger;
use crate::server::{signal, Server};

/// Load configuration, then run the variant's server on a single-threaded
/// runtime.
///
/// Returns only on a startup failure (bad config, missing root, busy port)
/// or, for variants that catch it, after an interrupt.
pub fn run(variant: Variant) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load(variant)?;
    logger::init(&cfg)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(variant, cfg))
}

async fn async_main(variant: Variant, cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    if variant.handles_interrupt() {
        logger::log_environment(&std::env::current_dir()?);
    }

    let root = cfg.resolve_root(variant)?;
    let addr = cfg.get_socket_addr()?;
    let server = Server::bind(addr, ServerState::new(&cfg, variant, root))?;

    logger::log_server_start(variant, server.local_addr()?.port());

    if variant.handles_interrupt() {
        server.serve_until(signal::interrupt()).await;
        logger::log_shutdown();
    } else {
        server.serve().await;
    }

    Ok(())
}
