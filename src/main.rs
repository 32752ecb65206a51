use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use overlay_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use overlay_wm::drivers::OutputDriver;
use overlay_wm::runner::{Workspace, run_workspace};
use overlay_wm::ui::CellScale;
use overlay_wm::{FileStore, KeyValueStore, MemoryStore, StaticHost, WmConfig, tracing_sub};

#[derive(Debug, Parser)]
#[command(
    name = "overlay-wm",
    version,
    about = "Floating, dockable and tabbable panels over a terminal"
)]
struct Cli {
    /// JSON file overriding the manager defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for saved window geometry. Without it nothing survives exit.
    #[arg(long)]
    state_dir: Option<PathBuf>,
    /// Host pixels per terminal column.
    #[arg(long, default_value_t = 8)]
    cell_width: u16,
    /// Host pixels per terminal row.
    #[arg(long, default_value_t = 18)]
    cell_height: u16,
    /// Append trace output to this file instead of discarding it.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Number of windows opened at startup.
    #[arg(long, default_value_t = 3)]
    windows: usize,
}

fn main() -> overlay_wm::Result<()> {
    let cli = Cli::parse();
    // stderr shares the terminal with the UI, so traces only go to a file
    if let Some(path) = &cli.log_file {
        tracing_sub::init_with_file(path)?;
    }

    let config = match &cli.config {
        Some(path) => WmConfig::from_file(path)?,
        None => WmConfig::default(),
    };
    let store: Box<dyn KeyValueStore> = match cli.state_dir {
        Some(dir) => Box::new(FileStore::new(dir)),
        None => Box::new(MemoryStore::new()),
    };

    let mut output = ConsoleOutputDriver::new()?;
    let size = output.size()?;
    let scale = CellScale::new(cli.cell_width, cli.cell_height);
    let mut workspace = Workspace::new(StaticHost::new(0, 0), store, config, scale);
    workspace.resize(size.width, size.height);
    for _ in 0..cli.windows {
        workspace.open_demo_window();
    }
    tracing::info!(
        columns = size.width,
        rows = size.height,
        windows = cli.windows,
        "starting"
    );

    output.enter()?;
    let result = run_workspace(
        &mut output,
        ConsoleInputDriver::new(),
        &mut workspace,
        Duration::from_millis(16),
    );
    output.exit()?;
    result?;
    Ok(())
}
