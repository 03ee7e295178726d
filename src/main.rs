use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use iiif_core::ParsedRequest;
use iris::api;
use iris::models::AppConfig;
use iris::server;
use iris::services::{create_resolver, ImageService};

#[derive(Parser)]
#[command(name = "iris")]
#[command(about = "Iris - IIIF Image API 2.1 image server")]
struct Cli {
    /// Path to config.yaml (falls back to the CONFIG_FILE env var)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Run one image request through the pipeline, no server needed
    Render {
        /// Image identifier, resolved through the configured resolver
        identifier: String,

        /// Region component (full | square | x,y,w,h | pct:x,y,w,h)
        #[arg(default_value = "full")]
        region: String,

        /// Size component (full | max | w, | ,h | pct:n | w,h | !w,h)
        #[arg(default_value = "max")]
        size: String,

        /// Rotation component, degrees with optional ! mirror prefix
        #[arg(default_value = "0")]
        rotation: String,

        /// Quality component (color | gray | bitonal | default)
        #[arg(default_value = "default")]
        quality: String,

        /// Format component (jpg | tif | png | gif | webp)
        #[arg(default_value = "png")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Iris API",
        description = "IIIF Image API 2.1 image server",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::status::handle_root,
        api::status::handle_version,
        api::info::handle_image_info,
        api::info::handle_identifier_redirect,
        api::image::handle_image_request,
    ),
    components(schemas(
        api::StatusResponse,
        api::VersionResponse,
        iris::error::ErrorResponse,
    )),
    tags(
        (name = "Server", description = "Liveness and version"),
        (name = "Info", description = "Capability documents"),
        (name = "Image", description = "Image delivery")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Serve) => run_server(config_path.as_deref()).await,
        Some(Commands::Render {
            identifier,
            region,
            size,
            rotation,
            quality,
            format,
            output,
        }) => {
            run_render_command(
                config_path.as_deref(),
                &identifier,
                &region,
                &size,
                &rotation,
                &quality,
                &format,
                &output,
            )
            .await
        }
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the HTTP server
async fn run_server(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)?;

    init_tracing(
        config
            .verbosity
            .as_deref()
            .unwrap_or("iris=debug,tower_http=debug"),
    );

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = ?config_path.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        resolver = %config.resolver,
        image_root = %config.image_root.display(),
        api_url = %config.api_url,
        "Configuration loaded"
    );

    let state = server::create_app_state(config)?;

    // Build router: shared API routes plus production-only documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Iris server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run one request through the pipeline and write the bytes to a file
#[allow(clippy::too_many_arguments)]
async fn run_render_command(
    config_path: Option<&Path>,
    identifier: &str,
    region: &str,
    size: &str,
    rotation: &str,
    quality: &str,
    format: &str,
    output: &Path,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    init_tracing("iris=warn");

    let config = AppConfig::load(config_path)?;

    let request = ParsedRequest::parse(identifier, region, size, rotation, quality, format)
        .map_err(|e| anyhow::anyhow!("invalid request: {e}"))?;

    let resolver = create_resolver(&config)?;
    let images = ImageService::new(resolver, config.resample_filter);

    let rendered = images.render(request).await?;
    std::fs::write(output, &rendered.bytes)?;

    println!(
        "Wrote {} bytes ({}) to {}",
        rendered.bytes.len(),
        rendered.media_type,
        output.display()
    );

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();

    println!("Iris v{VERSION} - IIIF Image API 2.1 image server\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE")
            .as_deref()
            .unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    match AppConfig::load(config_path) {
        Ok(config) => {
            let source = config_path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string());
            println!("  Source:     {source}");
            println!("  Resolver:   {}", config.resolver);
            println!(
                "  Image root: {} {}",
                config.image_root.display(),
                if config.image_root.is_dir() {
                    ""
                } else {
                    "(missing)"
                }
            );
            println!("  API URL:    {}", config.api_url);
        }
        Err(e) => println!("  Error:      {e}"),
    }

    println!("\nCommands:");
    println!("  iris serve     Start the HTTP server");
    println!("  iris render    Run one image request to a file");
    println!("\nRun 'iris --help' for more details.");
}
