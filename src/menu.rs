use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::config::{Config, Target};
use crate::mac::MacAddr;
use crate::sender;

/// Interactive target picker over the configured list. Runs until the user
/// quits, stdin closes, or the token is cancelled (SIGINT).
pub async fn run(config_path: &str, token: CancellationToken) -> Result<()> {
    let mut config = Config::load(config_path)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let valid = print_targets(&config);
        if valid.is_empty() {
            println!("no valid targets configured.");
            println!("edit '{config_path}' to add targets, then reload.");
        }

        println!();
        println!("enter a target number to wake it, 'r' to reload, 'q' to quit");

        let line = tokio::select! {
            _ = token.cancelled() => break,
            res = lines.next_line() => match res? {
                Some(line) => line,
                None => break,
            },
        };

        match line.trim() {
            "" => continue,
            "q" | "Q" => break,
            "r" | "R" => {
                match Config::load(config_path) {
                    Ok(cfg) => config = cfg,
                    Err(e) => log::error!("reload failed: {e:#}"),
                }
                continue;
            }
            choice => match choice.parse::<usize>() {
                Ok(n) if (1..=valid.len()).contains(&n) => {
                    let target = &valid[n - 1];
                    match sender::send(&target.mac, &target.ip, target.port).await {
                        Ok(sent) => {
                            log::info!("sent {} bytes to wake '{}'", sent, target.name);
                        }
                        Err(e) => log::error!("failed to wake '{}': {}", target.name, e),
                    }
                }
                _ => println!("invalid choice '{choice}'"),
            },
        }
    }

    Ok(())
}

/// Prints the configured targets and returns the selectable (valid) ones.
/// Entries with unparsable addresses are shown but not selectable.
fn print_targets(config: &Config) -> Vec<Target> {
    println!();
    println!("available targets:");

    let mut valid: Vec<Target> = Vec::new();
    for target in &config.targets {
        match target.mac.parse::<MacAddr>() {
            Ok(addr) => {
                valid.push(target.clone());
                println!(
                    "  {}. {} ({}) -> {}:{}",
                    valid.len(),
                    target.name,
                    addr,
                    target.ip,
                    target.port
                );
            }
            Err(e) => println!("  -  {} - invalid: {}", target.name, e),
        }
    }

    valid
}
