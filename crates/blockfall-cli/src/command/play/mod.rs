use std::path::PathBuf;

use rand::Rng as _;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub struct PlayArg {
    /// Start from a fixed seed instead of a random one
    #[clap(long)]
    seed: Option<u64>,
    /// Save the game recording to a file when the session ends
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = "./data/recordings/")]
    record_dir: PathBuf,
    /// Maximum number of turns to keep in memory (oldest are discarded)
    #[clap(long, default_value_t = 10000)]
    history_size: usize,
}

pub fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        save_recording,
        record_dir,
        history_size,
    } = arg;

    let entropy = seed.unwrap_or_else(|| rand::rng().random());
    let mut app = PlayApp::new(entropy, *history_size);

    Tui::new().run(&mut app)?;

    if *save_recording {
        let path = app.into_history().save(record_dir)?;
        eprintln!("Recording saved to {}", path.display());
    }

    Ok(())
}
