mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profile_loader::{ClientConfig, HttpProfileApi, ProfileLoader};

#[derive(Parser)]
#[command(name = "profilectl")]
#[command(version, about = "Load user profiles from the profile API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (overrides PROFILE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides PROFILE_REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's profile and organization memberships
    ///
    /// Examples:
    ///     profilectl show u1
    ///     profilectl show u1 --format json
    ///     profilectl --api-url https://api.example.com show u1
    #[command(verbatim_doc_comment)]
    Show {
        /// User identifier
        #[arg(value_name = "USER_ID")]
        user_id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the profile
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,profile_loader=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(api_url = %config.api_url, "Client configuration loaded");

    match cli.command {
        Commands::Show { user_id, format } => show(&config, &user_id, format).await,
    }
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("Failed to read PROFILE_* environment")?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }
    Ok(config)
}

async fn show(config: &ClientConfig, user_id: &str, format: OutputFormat) -> Result<()> {
    let api = HttpProfileApi::new(config)?;
    let loader = ProfileLoader::new(api);

    let bundle = loader.fetch_profile_bundle(user_id).await.map_err(|e| {
        tracing::error!(user_id, error = %e, "Profile load failed");
        anyhow::anyhow!(e.user_message())
    })?;

    match format {
        OutputFormat::Text => {
            let card = render::profile_card(&bundle).context("Failed to render profile")?;
            print!("{}", card);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&bundle).context("Failed to encode profile")?;
            println!("{}", json);
        }
    }

    Ok(())
}
