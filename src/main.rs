use clap::Parser;
use notice_reply::{cli::Cli, utils::init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    Cli::parse().run().await
}
