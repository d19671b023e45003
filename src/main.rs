use clap::Parser;
use social_graph::app::export::export_state;
use social_graph::config::cli::Command;
use social_graph::domain::model::FollowerCount;
use social_graph::domain::ports::SocialApi;
use social_graph::utils::logger;
use social_graph::{ApiClient, CliConfig, SocialGraphError, SocialStore, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.load_file() {
        Ok(file_config) => file_config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e)
        }
    };

    let log_level = file_config.as_ref().and_then(TomlConfig::log_level);
    if file_config.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger(cli.verbose, log_level);
    } else {
        logger::init_cli_logger(cli.verbose, log_level);
    }

    tracing::info!("Starting social-graph CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let client_config = match cli.merge(file_config.as_ref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Using graph API at {}", client_config.base_url);

    let client = match ApiClient::new(&client_config) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };

    match cli.command {
        Command::Fetch => {
            let store = SocialStore::new(client);
            store.fetch_all_data().await;
            println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        }
        Command::Seed => {
            let store = SocialStore::new(client);
            match store.reset_and_seed().await {
                Ok(summary) => {
                    tracing::info!("✅ {}", summary.message);
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
                }
                Err(e) => fail(&e),
            }
        }
        Command::Analytics => match client.get_analytics().await {
            Ok(analytics) => {
                for row in FollowerCount::from_analytics(&analytics) {
                    tracing::debug!(
                        "{}: {} followers",
                        row.name.as_deref().unwrap_or("?"),
                        row.followers
                    );
                }
                println!("{}", serde_json::to_string_pretty(&analytics)?);
            }
            Err(e) => fail(&e),
        },
        Command::Health => {
            let status = match client.health().await {
                Ok(status) => status,
                Err(e) => fail(&e),
            };
            let counts = match client.debug_counts().await {
                Ok(counts) => counts,
                Err(e) => fail(&e),
            };
            println!(
                "{} ({}): {} nodes, {} relationships",
                status.status,
                status.service.as_deref().unwrap_or("unknown service"),
                counts.nodes,
                counts.relationships
            );
        }
        Command::Export { output_dir } => {
            let store = SocialStore::new(client);
            store.fetch_all_data().await;
            match export_state(&store.snapshot(), &output_dir) {
                Ok(summary) => {
                    tracing::info!(
                        "📁 Exported {} nodes, {} edges, {} analytics rows",
                        summary.node_count,
                        summary.edge_count,
                        summary.analytics_count
                    );
                    println!("📁 Output saved to: {}", output_dir.display());
                }
                Err(e) => fail(&e),
            }
        }
    }

    Ok(())
}

fn fail(e: &SocialGraphError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
