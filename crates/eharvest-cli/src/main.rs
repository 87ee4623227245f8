mod report;

use clap::{Parser, Subcommand};
use eharvest_client::{ElementsClient, DEFAULT_PAGE, DEFAULT_QUERY};
use eharvest_pipeline::ItemsRequest;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "eharvest")]
#[command(about = "Harvest item samples and refinement facets from the Envato Elements data API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sample one page of items per category and export inferred schemas
    Items {
        /// Search term; lowercased into the request path
        #[arg(long, default_value = DEFAULT_QUERY)]
        query: String,

        /// Result page to request
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },
    /// Export refinement (search facet) metadata per category
    Refinements,
    /// Run the item pipeline, then the refinement pipeline
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = eharvest_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let client = ElementsClient::new(&config)?;

    match cli.command {
        Some(Commands::Items { query, page }) => {
            let request = ItemsRequest { query, page };
            let summary = eharvest_pipeline::run_items_pipeline(&client, &config, &request).await?;
            report::print_items(&summary);
        }
        Some(Commands::Refinements) => {
            let summary = eharvest_pipeline::run_refinements_pipeline(&client, &config).await?;
            report::print_refinements(&summary);
        }
        Some(Commands::All) | None => {
            let summary =
                eharvest_pipeline::run_items_pipeline(&client, &config, &ItemsRequest::default())
                    .await?;
            report::print_items(&summary);
            let summary = eharvest_pipeline::run_refinements_pipeline(&client, &config).await?;
            report::print_refinements(&summary);
        }
    }

    Ok(())
}
