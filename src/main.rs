use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console_snake::GameEngine;
use console_snake::error::GameError;
use console_snake::input::LineInput;
use console_snake::renderer::TextRenderer;
use console_snake::session;
use console_snake::settings::{Settings, load_settings, settings_path};

#[derive(Debug, Parser)]
#[command(version, about = "Turn-based Snake on the text console")]
struct Cli {
    /// Board height in cells.
    #[arg(long)]
    rows: Option<u16>,

    /// Board width in cells.
    #[arg(long)]
    cols: Option<u16>,

    /// Seed for random food placement once the fixed food list runs out.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to read instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Colour the board glyphs with ANSI escapes.
    #[arg(long)]
    color: bool,
}

impl Cli {
    fn overrides(&self) -> Settings {
        Settings {
            rows: self.rows,
            cols: self.cols,
            seed: self.seed,
            color: self.color.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("console-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let settings = load_settings(&path)?.overlaid_with(cli.overrides());
    log::info!("settings from {}: {settings:?}", path.display());

    let mut engine = match settings.seed {
        Some(seed) => GameEngine::with_seed(settings.rows(), settings.cols(), seed)?,
        None => GameEngine::new(settings.rows(), settings.cols())?,
    };

    let mut input = LineInput::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    let summary = session::run(
        &mut engine,
        &mut input,
        &TextRenderer::new(settings.color()),
        &mut out,
    )?;
    log::info!(
        "session ended: {:?}, {} turns, length {}",
        summary.end,
        summary.turns,
        summary.length
    );

    Ok(())
}
