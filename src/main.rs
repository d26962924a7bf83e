use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use careerpath::connector::api::http;
use careerpath::connector::adapter::{DEFAULT_LOCATION, DEFAULT_MODEL, DEFAULT_PROJECT};
use careerpath::{Commands, Container, ContainerConfig, VertexConfig};

#[derive(Parser)]
#[command(name = "careerpath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from canned responses instead of calling Vertex AI
    #[arg(long, global = true, env = "CAREERPATH_MOCK_LLM")]
    mock_llm: bool,

    #[arg(long, global = true, env = "VERTEX_PROJECT", default_value = DEFAULT_PROJECT)]
    project: String,

    #[arg(long, global = true, env = "VERTEX_LOCATION", default_value = DEFAULT_LOCATION)]
    location: String,

    #[arg(long, global = true, env = "VERTEX_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// OAuth bearer token for Vertex AI (e.g. `gcloud auth print-access-token`)
    #[arg(long, global = true, env = "VERTEX_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Override the Vertex AI endpoint host (useful for proxies)
    #[arg(long, global = true, env = "VERTEX_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, global = true, env = "CAREERPATH_STATIC_DIR", default_value = "templates")]
    static_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let container = Container::new(ContainerConfig {
        mock_llm: cli.mock_llm,
        vertex: VertexConfig {
            project: cli.project,
            location: cli.location,
            model: cli.model,
            access_token: cli.access_token,
            base_url: cli.base_url,
        },
        static_dir: cli.static_dir,
    })?;

    match cli.command {
        Commands::Serve { port, public } => {
            let ip = if public {
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            } else {
                IpAddr::V4(Ipv4Addr::LOCALHOST)
            };
            http::serve(Arc::new(container), SocketAddr::new(ip, port)).await?;
        }
        command => {
            let router = careerpath::connector::api::Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
