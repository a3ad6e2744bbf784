use anyhow::Context;
use clap::Parser;
use std::io::Read;
use webkit_utils::config::Command;
use webkit_utils::utils::{logger, validation::Validate};
use webkit_utils::{adapters::server, format_phone_us, from_json_bytes, CliConfig, UtilError};

fn exit_with(action: &str, e: &UtilError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?})",
        action,
        e,
        e.category()
    );
    eprintln!("❌ {}", e.user_friendly_message());

    // 呼叫端輸入錯誤回 1，其它(網路、系統)回 2
    let exit_code = if e.is_client_error() { 1 } else { 2 };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json() {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with("Configuration validation", &e);
    }

    match config.command {
        Command::Port(port) => {
            println!("{}", port.listen_addr());
        }
        Command::Phone { inputs } => {
            let mut failed = false;
            for input in &inputs {
                match format_phone_us(input) {
                    Ok(phone) => println!("{}", phone),
                    Err(e) => {
                        tracing::debug!("Rejected phone input: {}", e);
                        eprintln!("❌ {}", UtilError::from(e).user_friendly_message());
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        Command::Json { pretty } => {
            let mut input = Vec::new();
            std::io::stdin()
                .read_to_end(&mut input)
                .context("failed to read JSON from stdin")?;

            let value: serde_json::Value = match from_json_bytes(&input) {
                Ok(value) => value,
                Err(e) => exit_with("JSON decode", &e),
            };

            let rendered = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                webkit_utils::to_json(&value)?.text
            };
            println!("{}", rendered);
        }
        Command::Serve { port, .. } => {
            let listen_addr = port.listen_addr();
            tracing::info!("Starting webkit-utils server on {}", listen_addr);
            if let Err(e) = server::serve(&listen_addr).await {
                exit_with(&format!("Server on {}", listen_addr), &e);
            }
        }
    }

    Ok(())
}
