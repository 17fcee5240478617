//! # datamaster
//!
//! Builds and serves the DataMaster landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Static build (resolved page + optional placeholder shell)
//! datamaster render --out dist/index.html --shell dist/shell.html
//!
//! # Page metadata as JSON
//! datamaster --mode development metadata --pretty
//!
//! # Local preview
//! datamaster --mode development serve --port 3000
//! ```
//!
//! Configuration layers, highest first: flags, `DATAMASTER_BASE_URL` /
//! `DATAMASTER_ENV`, `datamaster.toml`, built-in defaults.

mod serve;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use datamaster_site::config::{
    BaseUrlSource, Overrides, RuntimeMode, ServeConfig, SiteConfig, SiteFile,
};
use datamaster_site::metadata::generate_metadata;
use datamaster_site::render_landing;

#[derive(Parser, Debug)]
#[command(name = "datamaster")]
#[command(about = "Build and serve the DataMaster landing page")]
#[command(version)]
struct Args {
    /// Config file (default: ./datamaster.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Absolute base URL used for canonical and social-card links
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Runtime mode; selects the fallback base URL
    #[arg(long, global = true, value_parser = ["development", "dev", "production"])]
    mode: Option<String>,

    /// Directory with JSON content overrides
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page to static HTML
    Render {
        /// Output file for the resolved page
        #[arg(short, long, default_value = "dist/index.html")]
        out: PathBuf,

        /// Also write the placeholder shell (first render pass)
        #[arg(long)]
        shell: Option<PathBuf>,

        /// Exit with an error if any section failed to load
        #[arg(long)]
        strict: bool,
    },
    /// Print the page metadata as JSON
    Metadata {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Serve the rendered page over HTTP
    Serve {
        /// Interface to bind (default from config, else 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default from config, else 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn load_site_file(path: Option<&Path>) -> Result<SiteFile> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            Ok(SiteFile::load_from_path(path))
        }
        None => Ok(SiteFile::load(Path::new("."))),
    }
}

fn resolve_config(args: &Args, file: &SiteFile) -> SiteConfig {
    let cli = Overrides {
        base_url: args.base_url.clone(),
        mode: args.mode.as_deref().map(RuntimeMode::from_flag),
        content_dir: args.content_dir.clone(),
    };
    let config = SiteConfig::resolve(cli.or(Overrides::from_env()).or(file.overrides()));

    match config.base_url.source() {
        BaseUrlSource::Explicit => debug!(base_url = config.base_url.as_str(), "explicit base URL"),
        BaseUrlSource::ModeDefault(mode) => debug!(
            base_url = config.base_url.as_str(),
            mode = mode.as_str(),
            "base URL from mode default"
        ),
    }
    config
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}

async fn render(config: &SiteConfig, out: &Path, shell: Option<&Path>, strict: bool) -> Result<()> {
    let page = render_landing(config).await;

    for outcome in &page.outcomes {
        match &outcome.error {
            Some(err) => warn!(section = outcome.name, "failed: {}", err),
            None => debug!(section = outcome.name, state = outcome.state.as_str()),
        }
    }

    write_output(out, &page.document)?;
    if let Some(shell) = shell {
        write_output(shell, &page.shell)?;
    }

    let failed: Vec<_> = page.failed_sections().map(|o| o.name).collect();
    if strict && !failed.is_empty() {
        bail!("{} section(s) failed to load: {}", failed.len(), failed.join(", "));
    }
    Ok(())
}

fn print_metadata(config: &SiteConfig, pretty: bool) -> Result<()> {
    let meta = generate_metadata(config);
    let json = if pretty {
        serde_json::to_string_pretty(&meta)
    } else {
        serde_json::to_string(&meta)
    }
    .context("failed to serialize metadata")?;
    println!("{}", json);
    Ok(())
}

async fn serve_page(
    config: &SiteConfig,
    defaults: &ServeConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let page = render_landing(config).await;
    let pages = serve::Pages::from_rendered(&page)?;

    let host = host.unwrap_or_else(|| defaults.host.clone());
    let port = port.unwrap_or(defaults.port);
    let listener = serve::bind(&host, port)?;
    info!(
        "serving {} on http://{}",
        page.metadata.base_url,
        listener.local_addr().context("listener has no address")?
    );

    tokio::task::spawn_blocking(move || serve::run(listener, pages))
        .await
        .context("server thread panicked")?
}

async fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("datamaster v{}", env!("CARGO_PKG_VERSION"));

    let file = load_site_file(args.config.as_deref())?;
    let config = resolve_config(&args, &file);

    match args.command {
        Command::Render { out, shell, strict } => {
            render(&config, &out, shell.as_deref(), strict).await
        }
        Command::Metadata { pretty } => print_metadata(&config, pretty),
        Command::Serve { host, port } => serve_page(&config, &file.serve, host, port).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[datamaster] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
