use std::{
    path::PathBuf,
    process::ExitCode,
    sync::{mpsc, Arc},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use imgpick::{
    browse::{BrowseEngine, BrowseResult, PickerOptions},
    config::{self, Config},
    fs::LocalReader,
    logging,
    ui::{self, layout::PaneVisibility},
};

/// Pick one image below a storage root. Prints the chosen path on stdout.
#[derive(Debug, Parser)]
#[command(name = "imgpick", version)]
struct Args {
    /// Upper navigation boundary
    #[arg(long)]
    root: Option<String>,

    /// Directory to start in (must be inside the root)
    #[arg(long)]
    initial_dir: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here instead of the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start with the thumbnail pane hidden
    #[arg(long)]
    no_preview: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(BrowseResult::Selected(path)) => {
            println!("{}", path);
            ExitCode::SUCCESS
        }
        Ok(BrowseResult::Cancelled) => ExitCode::from(1),
        Err(e) => {
            eprintln!("imgpick: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<BrowseResult> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(root) = args.root {
        config.general.root = root;
    }
    if let Some(dir) = args.initial_dir {
        config.general.initial_directory = Some(dir);
    }
    if args.log_file.is_some() {
        config.logging.file = args.log_file;
    }
    if args.no_preview {
        config.display.show_preview = false;
    }

    if let Some(file) = config.log_file()
        && let Err(e) = logging::init(&config.logging.level, &file)
    {
        eprintln!("imgpick: logging disabled: {:#}", e);
    }
    info!(
        "starting, root {} (config {:?})",
        config.general.root,
        args.config.clone().or_else(config::config_file)
    );

    // Host side of the session: whichever callback fires ends the picker
    let (tx, rx) = mpsc::channel();
    let select_tx = tx.clone();
    let options = PickerOptions::new(
        move |path| {
            let _ = select_tx.send(BrowseResult::Selected(path.to_string()));
        },
        move || {
            let _ = tx.send(BrowseResult::Cancelled);
        },
    )
    .initial_directory(config.initial_directory());

    let engine = BrowseEngine::open(
        Arc::new(LocalReader::new()),
        &config.general.root,
        options,
        config.engine_settings(),
    )
    .context("starting browse session")?;

    let visibility = PaneVisibility {
        preview: config.display.show_preview,
    };
    ui::run(engine, visibility)?;

    rx.try_recv()
        .context("picker closed without delivering a result")
}
