//! WebServer entry point
//!
//! Serves the demo UI and the predict/optimize API over HTTP.

use clap::Parser;
use std::net::SocketAddr;

use engine::optimization::AdjustmentSettings;
use engine::UniformNoise;
use shared::logging::{self, Component};
use webserver::{EnginePredictionService, RealFileManager, WebServer, WebServerResult};

/// Command line arguments for the demo webserver
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP server for the HIC surrogate demo")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Static files directory for the demo page
    #[arg(long, default_value = "./static")]
    static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Amplitude of the uniform prediction noise
    #[arg(long, default_value_t = UniformNoise::DEFAULT_AMPLITUDE)]
    noise_amplitude: f64,

    /// Seed for reproducible noise (entropy-seeded if not provided)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    logging::init_tracing(Component::WebServer, Some(&args.log_level));

    let addr: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| webserver::WebServerError::config(format!("Invalid port: {e}")))?;

    // Initialize services with dependency injection
    let prediction_service =
        EnginePredictionService::with_noise(args.noise_amplitude, args.seed, AdjustmentSettings::default());
    let file_manager = RealFileManager::new(args.static_dir);

    let server = WebServer::new(prediction_service, file_manager);
    server.run(addr).await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}
