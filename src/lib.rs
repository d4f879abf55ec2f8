pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;

use cli::output::print_error;
use config::GatewayConfig;
use error::AppError;
use server::AppState;

use api::HueBridgeClient;

pub async fn run(cli_args: cli::Cli) -> i32 {
    if let Err(err) = logging::init(&cli_args.log_file, cli_args.verbose) {
        print_error(&err);
        return err.exit_code();
    }

    match start(&cli_args).await {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %err, "hue gateway stopped");
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn start(cli_args: &cli::Cli) -> Result<(), AppError> {
    let config = GatewayConfig::load(&cli_args.config)?;
    tracing::info!(
        config = %cli_args.config.display(),
        bridge = %config.hue_ip,
        verify_tls = config.verify_tls,
        "config loaded"
    );

    let settings = config.bridge_settings();
    let bridge = HueBridgeClient::new(&settings)?;
    tracing::info!(url = %bridge.base_url(), "bridge client ready");
    let state = AppState::new(bridge, settings.auth_request());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Hue gateway listening on http://{}", addr);

    server::serve(listener, state).await
}
