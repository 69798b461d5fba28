use clap::Parser;
use zabbix_items::utils::logger;
use zabbix_items::{get_items, CliConfig, Session, SessionConfig, ZabbixError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = SessionConfig::from_file(&cli.config)?;
    let mut session = Session::connect(&config).await?;

    if cli.verbose {
        match session.api_version().await {
            Ok(version) => tracing::info!("Connected to {} (API {})", session.url(), version),
            Err(e) => tracing::warn!("Could not read API version: {}", e),
        }
    }

    let outcome = get_items(&session, &cli.to_params()).await;

    if config.auth.api_token.is_none() {
        if let Err(e) = session.logout().await {
            tracing::warn!("Logout failed: {}", e);
        }
    }

    match outcome {
        Ok(items) => {
            for item in &items {
                let observed = item
                    .last_observed_time()
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| item.last_observed_at.to_string());
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    item.host_id, item.item_id, item.name, item.last_value, observed
                );
            }
            tracing::info!("Fetched {} items", items.len());
            Ok(())
        }
        Err(ZabbixError::NotFound) => {
            println!("no items found");
            Ok(())
        }
        Err(e) => {
            tracing::error!("item.get failed: {}", e);
            Err(e.into())
        }
    }
}
