mod action;

use clap::Parser;
use convochat_whatsapp::{config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = action::AppArgs::parse();
    let app_config = config::AppConfig::load()?;

    logger::setup_simple_logger(app_config.log_level()?)?;

    args.run(&app_config).await
}
