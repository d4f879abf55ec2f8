use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = hue_gateway::cli::Cli::parse();
    let exit_code = hue_gateway::run(cli).await;
    std::process::exit(exit_code);
}
