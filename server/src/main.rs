mod server_config;
mod session;
mod web_server;
mod ws_handler;

use clap::Parser;
use common::{log, logger};

use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to a YAML config file. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    config.validate()?;

    log!("Serving UI from {}", config.static_files_path.display());
    web_server::run_web_server(config).await;

    log!("Server shut down gracefully");

    Ok(())
}
