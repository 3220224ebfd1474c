//! Command line entry points: run the web server, or draft a reply offline
//! from files on disk.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::extract::{extract, extract_all};
use crate::models::{AppState, ReplyInputs, UploadedDocument};
use crate::reply::ReplyComposer;
use crate::routes::create_router;

#[derive(Parser, Debug)]
#[command(
    name = "notice-reply",
    version,
    about = "Draft structured replies to GST notices from uploaded documents."
)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web form and API server
    Serve(ServeArgs),
    /// Compose a draft from local files and print or save it
    Draft(DraftArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the PORT environment variable
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub struct DraftArgs {
    /// Notice document (PDF or plain text)
    #[arg(long)]
    pub notice: Option<PathBuf>,

    /// File holding a sample reply format to follow
    #[arg(long)]
    pub sample: Option<PathBuf>,

    /// Specific points or clarifications to include
    #[arg(long, default_value = "")]
    pub opinion: String,

    /// Supporting working paper; repeat for several
    #[arg(long = "supporting")]
    pub supporting: Vec<PathBuf>,

    /// Write the draft here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Draft(args)) => run_draft(args).await,
            Some(Commands::Serve(args)) => run_serve(args).await,
            None => run_serve(ServeArgs::default()).await,
        }
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!("Configuration loaded: {:?}", config.server);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.server.host, config.server.port))?;

    let app = create_router(AppState::new(config));

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn load_document(path: &Path) -> Result<UploadedDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    // No declared type: detection goes by the file extension.
    Ok(UploadedDocument::new(bytes, None).with_file_name(path.to_string_lossy()))
}

/// Extract the given files and compose today's draft.
pub async fn build_draft(args: &DraftArgs) -> Result<String> {
    let notice_text = match &args.notice {
        Some(path) => extract(&load_document(path).await?)?,
        None => String::new(),
    };

    let sample_reply = match &args.sample {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => String::new(),
    };

    let mut supporting = Vec::with_capacity(args.supporting.len());
    for path in &args.supporting {
        supporting.push(load_document(path).await?);
    }

    let inputs = ReplyInputs {
        notice_text,
        sample_reply,
        opinion: args.opinion.clone(),
        supporting_texts: extract_all(&supporting)?,
    };

    Ok(ReplyComposer::compose_today(&inputs))
}

async fn run_draft(args: DraftArgs) -> Result<()> {
    let draft = build_draft(&args).await?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &draft)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = draft.len(), "Draft written");
        }
        None => println!("{}", draft),
    }

    Ok(())
}
