use clap::Parser;
use may_minihttp::HttpServer;
use std::io;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use personapi::cli::Cli;
use personapi::dispatcher::Dispatcher;
use personapi::handlers;
use personapi::middleware::TracingMiddleware;
use personapi::router::Router;
use personapi::routes::build_routes;
use personapi::runtime_config::RuntimeConfig;
use personapi::server::AppService;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = RuntimeConfig::from_env();
    may::config().set_stack_size(config.stack_size);

    let router = Router::new(build_routes());
    if cli.dump_routes {
        router.dump_routes();
        return Ok(());
    }

    let mut dispatcher = Dispatcher::new();
    dispatcher.add_middleware(Arc::new(TracingMiddleware));
    // SAFETY: the may runtime is configured above; handlers reply once
    // per request through their channel.
    unsafe {
        handlers::register_all(&mut dispatcher);
    }

    let service = AppService::new(Arc::new(router), Arc::new(dispatcher));

    info!(addr = %cli.addr, stack_size = config.stack_size, "personapi listening");
    let server = HttpServer(service)
        .start(cli.addr.as_str())
        .map_err(io::Error::other)?;

    server
        .join()
        .map_err(|e| anyhow::anyhow!("server failed: {e:?}"))?;
    Ok(())
}
