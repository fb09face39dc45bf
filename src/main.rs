use clap::Parser;

use kakobingo_lib::bootstrap::tracing::init_tracing_subscriber;
use kakobingo_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry KAKOBINGO_CONFIG, so load it before parsing args.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber(cli.log_dir.as_deref()) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    cli::run(cli).await
}
