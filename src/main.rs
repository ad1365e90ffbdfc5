use std::io;

use tracing_subscriber::EnvFilter;

use cell_chess::console::console_top::run_stdio_loop;

const LOG_ENV: &str = "CELL_CHESS_LOG";

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the console protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    run_stdio_loop()
}
