extern crate tokio;

use std::{io::Write, process};

use clap::Parser;
use env_logger::Builder;
use log::{error, info};

use hashgen_repo::{cli::Cli, engine::Engine};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.level_filter())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let result = match Engine::from_cli(&cli).await {
        Ok(engine) => engine.run().await,
        Err(error) => Err(error),
    };

    match result {
        Ok(summary) => info!("done: {summary}"),
        Err(error) => {
            error!("{error}");
            process::exit(1);
        }
    }
}
