use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    cli::run(args, cfg).await
}
