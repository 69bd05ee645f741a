use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use wol_sender::{config, menu, sender};

#[derive(Parser)]
#[command(version, about = "Wake machines on the local network with magic packets")]
struct Cli {
    /// Hardware address of the machine to wake
    #[arg(short, long, env = "TARGET_MAC")]
    mac: Option<String>,

    /// Destination IP or broadcast address
    #[arg(short, long, env = "TARGET_IP", default_value = sender::DEFAULT_BROADCAST_ADDR)]
    ip: String,

    /// Destination UDP port
    #[arg(short, long, env = "WOL_PORT", default_value_t = sender::DEFAULT_WOL_PORT)]
    port: u16,

    /// Path to the JSON target list
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Pick a target interactively from the configured list
    #[arg(long, default_value_t = false)]
    menu: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to install logger");

    let cancel_token = CancellationToken::new();
    let sigint_token = cancel_token.clone();

    ctrlc::set_handler(move || {
        sigint_token.cancel();
    }).expect("Failed to install SIGINT handler");

    let result = if opts.menu {
        menu::run(&opts.config, cancel_token).await
    } else {
        wake_once(&opts).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn wake_once(opts: &Cli) -> anyhow::Result<()> {
    let mac = opts
        .mac
        .as_deref()
        .context("no hardware address given, set --mac or TARGET_MAC")?;

    let sent = sender::send(mac, &opts.ip, opts.port).await?;
    log::info!("sent {} bytes to {}:{}", sent, opts.ip, opts.port);

    Ok(())
}
