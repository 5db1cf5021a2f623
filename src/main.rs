use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use hexed::app::App;
use hexed::config::Config;
use hexed::services::{log_dirs, tracing_setup};
use hexed::state::EditorSession;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "hexed")]
#[command(about = "A terminal hex editor with undo/redo", long_about = None)]
#[command(version)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE", required_unless_present = "dump_config")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    hexed::config_io::resolve_config(args.config.as_deref()).context("Failed to load config")
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = load_config(&args)?;
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled ({}): {}", log_file.display(), e);
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("Editor starting");

    let config = load_config(&args)?;

    let Some(path) = args.file else {
        anyhow::bail!("No file given");
    };
    let session = EditorSession::open(&path)?;
    tracing::info!("Opened {:?} ({} bytes)", path, session.len());

    let mut app = App::new(session, config);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result.context("Terminal error")?;
    tracing::info!("Editor exiting");
    Ok(())
}
