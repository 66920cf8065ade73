#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use soundkit_album_grid::GridAction;
use soundkit_site_ui::albums;
use thiserror::Error;
use tokio::io::AsyncWriteExt as _;

static DEFAULT_OUTPUT_DIR: &str = "gen";
static CARGO_MANIFEST_DIR: std::sync::LazyLock<Option<PathBuf>> =
    std::sync::LazyLock::new(|| std::option_env!("CARGO_MANIFEST_DIR").map(Into::into));

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Render every static route to an HTML file
    Gen {
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Route a grid action JSON payload through the demo handlers
    Dispatch {
        #[arg(short, long)]
        action: String,
    },
}

#[derive(Debug, Error)]
enum SiteError {
    #[error(transparent)]
    Init(#[from] soundkit_logging::InitError),
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    ParseAction(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] soundkit_album_grid::GridError),
}

fn static_routes() -> Vec<(&'static str, maud::Markup)> {
    let state = albums::demo_state();

    vec![
        ("index", soundkit_site_ui::home()),
        ("components", soundkit_site_ui::components::components()),
        ("albums", albums::album_grid_example(&state)),
    ]
}

fn main() -> Result<(), SiteError> {
    soundkit_logging::init(Some("soundkit_site.log"))?;

    let args = Args::parse();
    log::info!("args={args:?}");

    match args.cmd {
        Commands::Gen { output } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            runtime.block_on(generate(output))?;
        }
        Commands::Dispatch { action } => {
            let action = GridAction::try_from(action.as_str())?;
            let albums = albums::demo_albums();

            soundkit_album_grid::handle_action(&action, &albums, &albums::logging_handlers())?;
        }
    }

    Ok(())
}

async fn generate(output: Option<String>) -> Result<(), SiteError> {
    let output = output.unwrap_or_else(|| {
        CARGO_MANIFEST_DIR
            .as_ref()
            .and_then(|x| x.join(DEFAULT_OUTPUT_DIR).to_str().map(ToString::to_string))
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    });
    let output_path: PathBuf = output.into();

    tokio::fs::create_dir_all(&output_path).await?;

    for (path, view) in static_routes() {
        let html = view.into_string();
        let output_path = output_path.join(format!("{path}.html"));

        log::debug!("gen path={path} -> {output_path:?}");

        let mut file = tokio::fs::File::options()
            .truncate(true)
            .write(true)
            .create(true)
            .open(&output_path)
            .await?;

        file.write_all(html.as_bytes()).await?;
    }

    Ok(())
}
