use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

mod cli;
mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

use error::StartupError;

const USAGE: &str = "Usage: fixture-server [-p <port> | --port <port>]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(args) = parse_cli(std::env::args_os().skip(1), &mut std::io::stdout()) else {
        std::process::exit(1);
    };

    let cfg = config::Config::load(&args).map_err(StartupError::from)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::from)?;

    runtime.block_on(async_main(cfg))?;
    Ok(())
}

/// Parse the command line, writing the error and usage to `out` on failure.
/// `None` means the process must exit with status 1 before binding anything.
fn parse_cli<I>(args: I, out: &mut impl Write) -> Option<cli::CliArgs>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    match cli::CliArgs::parse_from(args) {
        Ok(args) => Some(args),
        Err(e) => {
            let _ = writeln!(out, "Error: {e}");
            let _ = writeln!(out, "{USAGE}");
            None
        }
    }
}

async fn async_main(cfg: config::Config) -> Result<(), StartupError> {
    let addr = cfg
        .get_socket_addr()
        .map_err(|message| StartupError::Address { message })?;

    let listener =
        server::create_listener(addr).map_err(|source| StartupError::Bind { addr, source })?;

    let state = Arc::new(config::AppState::new(&cfg));

    logger::log_server_start(listener.local_addr()?.port());

    server::start_server_loop(listener, state).await;
    Ok(())
}
