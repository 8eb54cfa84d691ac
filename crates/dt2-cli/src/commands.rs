use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use dt2_chain::{InMemoryLedger, RpcLedger};
use dt2_server::{AppConfig, Dt2Server};
use dt2_service::FieldService;
use serde_json::json;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args, cli.in_memory).await,
        Command::Message(args) => {
            let (service, _) = connect(&config, cli.in_memory)?;
            let message = service.message(args.message.as_deref()).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json!(message)),
                OutputFormat::Text => println!("{}", message.bold()),
            }
            Ok(())
        }
        Command::Numbers => {
            let (service, _) = connect(&config, cli.in_memory)?;
            print_list(&cli.format, "numbers", &service.numbers().await?);
            Ok(())
        }
        Command::Names => {
            let (service, _) = connect(&config, cli.in_memory)?;
            print_list(&cli.format, "names", &service.names().await?);
            Ok(())
        }
        Command::Details => {
            let (service, _) = connect(&config, cli.in_memory)?;
            let details = service.details().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
                OutputFormat::Text => {
                    println!("Message:      {}", details.message.bold());
                    println!("Numbers:      {}", details.numbers.join(", ").cyan());
                    println!("Names:        {}", details.names.join(", ").cyan());
                    println!("Fixed data:   {}", details.fixed_data.yellow());
                    println!("Dynamic data: {}", details.dynamic_data.yellow());
                }
            }
            Ok(())
        }
        Command::Config => cmd_config(&config, &cli.format),
    }
}

/// File (if given), then environment.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    config.apply_env()?;
    Ok(config)
}

/// Build the field service and, for a real node, the contract address.
fn connect(config: &AppConfig, in_memory: bool) -> anyhow::Result<(FieldService, Option<String>)> {
    if in_memory {
        tracing::info!("using in-memory contract");
        return Ok((FieldService::new(Arc::new(InMemoryLedger::new())), None));
    }
    let ledger = RpcLedger::connect(&config.chain).context("connecting to the ledger")?;
    let contract = ledger.contract_address().to_string();
    Ok((FieldService::new(Arc::new(ledger)), Some(contract)))
}

async fn cmd_serve(mut config: AppConfig, args: ServeArgs, in_memory: bool) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    let (service, contract) = connect(&config, in_memory)?;

    println!(
        "{} DataType2 facade on {}",
        "✓".green().bold(),
        config.server.bind_addr.to_string().bold()
    );
    let mut server = Dt2Server::new(config.server, service);
    if let Some(contract) = contract {
        println!("  Contract: {}", contract.cyan());
        server = server.with_contract(contract);
    } else {
        println!("  Contract: {}", "in-memory".yellow());
    }
    server.serve().await?;
    Ok(())
}

fn cmd_config(config: &AppConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let key = if config.chain.private_key.is_empty() { "<unset>" } else { "<redacted>" };
    match format {
        OutputFormat::Json => {
            let value = json!({
                "server": {
                    "bind_addr": config.server.bind_addr.to_string(),
                    "cors": config.server.cors,
                },
                "chain": {
                    "rpc_url": config.chain.rpc_url,
                    "private_key": key,
                    "contract_address": config.chain.contract_address,
                },
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!("{}", "[server]".bold());
            println!("  bind_addr        = {}", config.server.bind_addr);
            println!("  cors             = {}", config.server.cors);
            println!("{}", "[chain]".bold());
            println!("  rpc_url          = {}", or_unset(&config.chain.rpc_url));
            println!("  private_key      = {}", key.dimmed());
            println!("  contract_address = {}", or_unset(&config.chain.contract_address));
        }
    }
    Ok(())
}

fn print_list(format: &OutputFormat, label: &str, items: &[String]) {
    match format {
        OutputFormat::Json => println!("{}", json!(items)),
        OutputFormat::Text if items.is_empty() => println!("No {label}."),
        OutputFormat::Text => {
            for (i, item) in items.iter().enumerate() {
                println!("  {} {}", format!("[{i}]").dimmed(), item);
            }
        }
    }
}

fn or_unset(value: &str) -> String {
    if value.is_empty() {
        "<unset>".dimmed().to_string()
    } else {
        value.to_string()
    }
}
